use yew::prelude::*;

use crate::content::ContentKind;
use crate::pages::blog::{ContentDetail, ContentList};

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <ContentList
            kind={ContentKind::CaseStudy}
            title="Case Studies"
            subtitle="How organizations hire faster and stay compliant with ClearPath"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub slug: String,
}

#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    html! { <ContentDetail kind={ContentKind::CaseStudy} slug={props.slug.clone()} /> }
}

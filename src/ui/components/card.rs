//! Card component with header and content sections.

use leptos::prelude::*;

use crate::motion::TiltTransform;

/// Card container component.
///
/// Cards given a `tilt` angle lean toward the pointer on hover; the
/// browser script reads `data-tilt-max` and applies [`crate::motion::tilt`],
/// then restores `data-tilt-rest` when the pointer leaves.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card tilt=Some(8.0)>
///         <CardHeader>
///             <h3>"Title"</h3>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Maximum hover tilt in degrees; no tilt when `None`.
    #[prop(optional_no_strip)]
    tilt: Option<f32>,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "card h-full rounded-xl border border-panelBorder bg-panel text-textPrimary shadow-sm {}",
        class
    );
    let tilt_max = tilt.map(|deg| deg.to_string());
    let tilt_rest = tilt.map(|_| TiltTransform::NEUTRAL.to_string());

    view! {
        <div class=classes data-tilt-max=tilt_max data-tilt-rest=tilt_rest>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 p-6 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 pt-0 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

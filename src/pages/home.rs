use leptos::prelude::*;

use crate::components::skill_graph::{GraphLayout, LayoutConfig, SkillGraphCanvas};
use crate::data;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	// Rebuilt only if the dataset changes; it is constant for now.
	let layout = Memo::new(move |_| {
		data::load().and_then(|people| GraphLayout::build(people, &LayoutConfig::default()))
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<main>
				<div class="wrapper">
					<h2>"Skill Network"</h2>
					<div class="graph-container">
						{move || layout.get().map(|layout| view! { <SkillGraphCanvas layout=layout /> })}
					</div>
				</div>
			</main>
		</ErrorBoundary>
	}
}

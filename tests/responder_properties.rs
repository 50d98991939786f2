use proptest::prelude::*;
use quipbot::responder::{IdGenerator, QueryResponder, UuidGenerator};
use quipbot::templates::{MessageTemplate, Registry};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Deterministic ids: "id-0", "id-1", ...
#[derive(Default)]
struct CountingIds(AtomicUsize);

impl IdGenerator for CountingIds {
    fn new_id(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
    }
}

fn counting_responder() -> QueryResponder {
    QueryResponder::new(Arc::new(Registry::default()), Arc::new(CountingIds::default()))
}

#[test]
fn nice_job_example_with_fixed_ids() {
    let items = counting_responder().respond(Some("nice job"));

    let rendered: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i.display_title.as_str(), i.content.as_str()))
        .collect();
    assert_eq!(
        rendered,
        [
            ("🤨 Irony", "nice job\n\nironid:id-0"),
            ("😒 Sarcasm", "nice job\n\nsarcasmid:id-0"),
            ("😂 Meme", "nice job\n\nmemeid:id-0"),
        ]
    );
    let result_ids: Vec<&str> = items.iter().map(|i| i.result_id.as_str()).collect();
    assert_eq!(result_ids, ["id-1", "id-2", "id-3"]);
}

#[test]
fn responses_never_share_an_id() {
    let responder = QueryResponder::with_defaults();
    let tags: HashSet<String> = (0..200)
        .map(|_| responder.respond(Some("again")))
        .map(|items| items[0].description.clone())
        .collect();
    assert_eq!(tags.len(), 200);
}

#[test]
fn uuid_generator_object_is_usable_behind_arc() {
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);
    assert_ne!(ids.new_id(), ids.new_id());
}

proptest! {
    #[test]
    fn one_item_per_template(text in "\\PC+") {
        let responder = counting_responder();
        let items = responder.respond(Some(text.as_str()));
        prop_assert_eq!(items.len(), responder.registry().len());
    }

    #[test]
    fn all_items_carry_the_same_tracking_id(text in "\\PC+") {
        let responder = QueryResponder::with_defaults();
        let items = responder.respond(Some(text.as_str()));

        let ids: HashSet<&str> = items
            .iter()
            .filter_map(|i| i.description.split_once("id:").map(|(_, id)| id))
            .collect();
        prop_assert_eq!(ids.len(), 1);

        for (item, template) in items.iter().zip(responder.registry().templates()) {
            let tag_prefix = format!("{}id:", template.alias);
            prop_assert!(item.description.starts_with(&tag_prefix));
            let expected_end = format!("\n\n{}", item.description);
            prop_assert!(item.content.ends_with(&expected_end));
            prop_assert!(item.content.starts_with(text.as_str()));
        }
    }

    #[test]
    fn render_is_idempotent(text in "\\PC*", id in "[a-f0-9-]{0,36}") {
        let template = MessageTemplate::new("Irony", "🤨", "iron");
        prop_assert_eq!(template.render(&text, &id), template.render(&text, &id));
    }
}

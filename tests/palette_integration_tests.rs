use unicode_palette::core::destination::{ObjectKind, StripKind};
use unicode_palette::core::dispatcher::{Notice, NoticeLevel};
use unicode_palette::core::workspace::{SceneObject, Strip, TextBuffer};
use unicode_palette::{
    Category, DestinationContext, DestinationKind, Host, InsertError, InsertionOutcome, Palette,
    SkipReason, Workspace,
};

fn object(name: &str, kind: ObjectKind, body: &str) -> SceneObject {
    SceneObject {
        name: name.to_string(),
        kind,
        body: body.to_string(),
    }
}

#[test]
fn test_every_category_resolves_to_symbols() {
    let palette = Palette::default();
    for category in Category::ALL {
        assert!(
            !palette.symbols(category.key()).is_empty(),
            "{} has no symbols",
            category.key()
        );
    }
    assert!(palette.symbols("").is_empty());
    assert!(palette.symbols("GREEK LETTERS").is_empty());
}

#[test]
fn test_lookup_is_stable_across_calls() {
    let palette = Palette::default();
    let first = palette.symbols("Weather");
    let second = palette.symbols("Weather");
    assert_eq!(first, second);
    assert_eq!(palette.displayed_symbols("Weather", 100), first);
}

#[test]
fn test_text_buffer_inserts_at_cursor() {
    let palette = Palette::default();
    let mut workspace = Workspace {
        active_text: Some("draft".to_string()),
        texts: vec![TextBuffer::new("draft", "héllo").with_cursor(2)],
        ..Workspace::default()
    };
    let mut notices: Vec<Notice> = Vec::new();

    palette
        .insert_into_host(&mut workspace, None, "→", &mut notices)
        .unwrap();
    palette
        .insert_into_host(&mut workspace, None, "←", &mut notices)
        .unwrap();

    assert_eq!(workspace.text("draft").unwrap().body, "hé→←llo");
    assert!(notices.is_empty());
}

#[test]
fn test_strip_kind_decides_insertion() {
    let palette = Palette::default();
    let mut workspace = Workspace {
        active_space: DestinationKind::TimelineStrip,
        active_strip: Some("Fill".to_string()),
        strips: vec![Strip {
            name: "Fill".to_string(),
            kind: StripKind::Color,
            text: String::new(),
        }],
        ..Workspace::default()
    };
    let mut notices: Vec<Notice> = Vec::new();

    let outcome = palette
        .insert_into_host(&mut workspace, None, "♪", &mut notices)
        .unwrap();

    assert_eq!(outcome, InsertionOutcome::Skipped(SkipReason::NotATextStrip));
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(
        notices[0].message,
        "Please select a text strip to add the character."
    );
    assert_eq!(workspace.strip("Fill").unwrap().text, "");
}

#[test]
fn test_scene_targets_first_text_object() {
    let palette = Palette::default();
    let mut workspace = Workspace {
        active_space: DestinationKind::SceneTextObject,
        objects: vec![
            object("Lamp", ObjectKind::Light, ""),
            object("Heading", ObjectKind::Font, "Hi"),
            object("Caption", ObjectKind::Font, "Cap"),
        ],
        ..Workspace::default()
    };
    let mut notices: Vec<Notice> = Vec::new();

    let outcome = palette
        .insert_into_host(&mut workspace, None, "😀", &mut notices)
        .unwrap();

    assert_eq!(
        outcome,
        InsertionOutcome::Inserted {
            destination: DestinationKind::SceneTextObject,
            target: "Heading".into(),
        }
    );
    assert_eq!(workspace.object("Heading").unwrap().body, "Hi😀");
    assert_eq!(workspace.object("Caption").unwrap().body, "Cap");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
}

#[test]
fn test_stale_context_is_an_error() {
    let palette = Palette::default();
    let mut workspace = Workspace::sample();
    let context = workspace.destination_context();
    workspace.texts.clear();
    let mut notices: Vec<Notice> = Vec::new();

    let result = palette.insert_symbol(&mut workspace, &context, "★", &mut notices);

    assert!(matches!(
        result,
        Err(InsertError::DestinationGone {
            kind: DestinationKind::TextBuffer,
            ..
        })
    ));
    assert!(notices.is_empty());
}

#[test]
fn test_fresh_context_reflects_host_changes() {
    let mut workspace = Workspace::sample();
    workspace.active_space = DestinationKind::TimelineStrip;
    assert_eq!(
        workspace.destination_context(),
        DestinationContext::TimelineStrip {
            strip: Some(("Title".into(), StripKind::Text)),
        }
    );

    workspace.active_strip = Some("Background".to_string());
    assert_eq!(
        workspace.destination_context(),
        DestinationContext::TimelineStrip {
            strip: Some(("Background".into(), StripKind::Color)),
        }
    );
}

#[test]
fn test_unrecognized_strip_kind_is_skipped() {
    let palette = Palette::default();
    let mut workspace: Workspace = toml::from_str(
        "active_space = \"sequence-editor\"\nactive_strip = \"W\"\n\n[[strips]]\nname = \"W\"\nkind = \"wipe\"\n",
    )
    .unwrap();
    let mut notices: Vec<Notice> = Vec::new();

    let outcome = palette
        .insert_into_host(&mut workspace, None, "★", &mut notices)
        .unwrap();

    assert_eq!(outcome, InsertionOutcome::Skipped(SkipReason::NotATextStrip));
    assert_eq!(workspace.strips[0].kind, StripKind::Other);
    assert_eq!(workspace.strips[0].text, "");
}

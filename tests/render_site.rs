use mypage::render::{PresetTable, render};
use mypage::site::{RawLink, RawProfile, normalize};

fn ann() -> RawProfile {
    RawProfile {
        full_name: Some("Ann".to_string()),
        profession: Some("Engineer".to_string()),
        bio: Some("Hi\nthere".to_string()),
        theme: Some("light".to_string()),
        accent_color: Some("#2563eb".to_string()),
        font_style: Some("inter".to_string()),
        layout_style: Some("minimal-editorial".to_string()),
        custom_sections: vec![RawLink::new("GitHub", "https://github.com/ann")],
        ..RawProfile::default()
    }
}

#[test]
fn renders_the_ann_example_end_to_end() {
    let site = render(&normalize(&ann()), &PresetTable::builtin());

    assert!(site.html.contains("<h1 class=\"name\">Ann</h1>"));
    assert!(site.html.contains("<p class=\"profession\">Engineer</p>"));
    assert!(site.html.contains("<title>Ann - Engineer</title>"));
    assert!(site.html.contains("Hi<br>there"));
    assert_eq!(site.html.matches("class=\"link-card\"").count(), 1);
    assert!(site.html.contains("<span class=\"link-title\">GitHub</span>"));
    assert!(!site.html.contains("class=\"education\""));

    assert!(site.css.contains("--color-accent: #2563eb;"));
    assert!(site.css.contains("--color-bg: #ffffff;"));
    assert!(site.css.contains("--color-bg-secondary: #f3f4f6;"));
}

#[test]
fn user_text_never_appears_unescaped() {
    let hostile = r#"<b onclick="x()">Tom & 'Jerry'</b>"#;
    let raw = RawProfile {
        full_name: Some(hostile.to_string()),
        profession: Some(hostile.to_string()),
        education: Some(hostile.to_string()),
        bio: Some(hostile.to_string()),
        custom_sections: vec![RawLink::new(hostile, "https://example.com/?a=1&b=2")],
        ..RawProfile::default()
    };

    let site = render(&normalize(&raw), &PresetTable::builtin());

    assert!(!site.html.contains("<b onclick"));
    assert!(!site.html.contains("onclick=\"x()\""));
    assert!(!site.html.contains("'Jerry'"));
    assert!(!site.html.contains("Tom & "));
    assert!(site.html.contains("&lt;b onclick=&quot;x()&quot;&gt;Tom &amp; "));
    assert!(site.html.contains("href=\"https://example.com/?a=1&amp;b=2\""));
}

#[test]
fn whitespace_only_bio_and_link_title_still_render() {
    let raw = RawProfile {
        bio: Some("  ".to_string()),
        custom_sections: vec![RawLink::new(" ", "https://ann.dev")],
        ..RawProfile::default()
    };
    let site = render(&normalize(&raw), &PresetTable::builtin());

    assert!(site.html.contains("<p class=\"bio-text\">  </p>"));
    assert_eq!(site.html.matches("class=\"link-card\"").count(), 1);
}

#[test]
fn unknown_layout_renders_like_the_default() {
    let unknown = RawProfile {
        layout_style: Some("holographic".to_string()),
        ..ann()
    };
    let default = RawProfile {
        layout_style: None,
        ..ann()
    };

    let presets = PresetTable::builtin();
    assert_eq!(
        render(&normalize(&unknown), &presets),
        render(&normalize(&default), &presets)
    );
}

#[test]
fn rendering_is_deterministic() {
    let presets = PresetTable::builtin();
    let first = render(&normalize(&ann()), &presets);
    let second = render(&normalize(&ann()), &presets);
    assert_eq!(first, second);
}

#[test]
fn every_sample_renders_non_empty_output() {
    for sample in mypage::site::samples::all() {
        let site = render(&normalize(&sample.profile()), &PresetTable::builtin());
        assert!(!site.html.is_empty(), "{} html", sample.id);
        assert!(!site.css.is_empty(), "{} css", sample.id);
        assert!(site.html.contains("links-section"), "{} links", sample.id);
    }
}

#[test]
fn layouts_share_one_document_structure() {
    let presets = PresetTable::builtin();
    let mut documents = ["split-focus", "bold-statement", "card-modular", "timeline-story"]
        .into_iter()
        .map(|layout| {
            let raw = RawProfile {
                layout_style: Some(layout.to_string()),
                ..ann()
            };
            render(&normalize(&raw), &presets)
        });

    let baseline = render(&normalize(&ann()), &presets);
    assert!(documents.all(|site| site.html == baseline.html && site.css != baseline.css));
}

#[test]
fn inlined_document_carries_the_stylesheet() {
    let site = render(&normalize(&ann()), &PresetTable::builtin());
    let inlined = site.inlined();

    assert!(!inlined.contains(mypage::render::STYLESHEET_LINK));
    assert!(inlined.contains("<style>"));
    assert!(inlined.contains(&site.css));
}

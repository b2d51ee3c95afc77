mod cli {
    pub use mypage::cli::*;
}

mod context {
    pub use mypage::context::*;
}

mod error {
    pub use mypage::error::*;
}

mod session {
    pub use mypage::session::*;
}

mod site {
    pub use mypage::site::*;
}

mod source_under_test {
    #![allow(dead_code)]

    include!("../src/commands/source.rs");

    #[test]
    fn empty_profile_file_means_all_defaults() {
        let profile = parse_profile("  \n").expect("blank input parses");
        assert_eq!(profile, RawProfile::default());
    }

    #[test]
    fn malformed_profile_is_a_json_error() {
        match parse_profile("{\"fullName\": ") {
            Err(AppError::Json(_)) => {}
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn watches_input_photo_and_icons_in_order() {
        let source = SourceArgs {
            input: Some(PathBuf::from("me.json")),
            sample: None,
            photo: Some(PathBuf::from("me.png")),
            icons: vec![crate::cli::IconArg {
                section: 1,
                path: PathBuf::from("gh.svg"),
            }],
        };

        assert_eq!(
            watched_paths(&source),
            [
                PathBuf::from("me.json"),
                PathBuf::from("me.png"),
                PathBuf::from("gh.svg"),
            ]
        );
    }
}

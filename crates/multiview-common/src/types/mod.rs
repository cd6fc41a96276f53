mod core;
mod platform;
mod stream;

pub use self::core::*;
pub use platform::*;
pub use stream::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_inset_clamps_to_zero() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inset = r.inset(8.0);
        assert_eq!(inset.x, 8.0);
        assert_eq!(inset.width, 0.0);
        assert_eq!(inset.height, 0.0);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn layout_type_serializes_to_literal_names() {
        assert_eq!(
            serde_json::to_string(&LayoutType::TwoByOne).unwrap(),
            "\"2x1\""
        );
        assert_eq!(
            serde_json::to_string(&LayoutType::PictureInPicture).unwrap(),
            "\"picture-in-picture\""
        );
        let parsed: LayoutType = serde_json::from_str("\"3x3\"").unwrap();
        assert_eq!(parsed, LayoutType::ThreeByThree);
    }

    #[test]
    fn layout_type_from_str() {
        for t in LayoutType::ALL {
            assert_eq!(t.as_str().parse::<LayoutType>().unwrap(), t);
        }
        assert_eq!("PIP".parse::<LayoutType>().unwrap(), LayoutType::PictureInPicture);
        assert!("4x4".parse::<LayoutType>().is_err());
    }

    #[test]
    fn layout_type_capacity_and_support() {
        assert!(LayoutType::OneByOne.supports(0));
        assert!(LayoutType::OneByOne.supports(1));
        assert!(!LayoutType::OneByOne.supports(2));
        assert!(LayoutType::TwoByTwo.supports(4));
        assert!(!LayoutType::TwoByTwo.supports(5));
        assert!(!LayoutType::PictureInPicture.supports(1));
        assert!(LayoutType::PictureInPicture.supports(2));
        assert!(!LayoutType::PictureInPicture.supports(3));
        assert!(LayoutType::Auto.supports(MAX_STREAMS));
        assert_eq!(LayoutType::ThreeByThree.capacity(), 9);
    }

    #[test]
    fn pip_position_kebab_case() {
        assert_eq!(
            serde_json::to_string(&PipPosition::TopLeft).unwrap(),
            "\"top-left\""
        );
        assert_eq!(PipPosition::default(), PipPosition::BottomRight);
        assert_eq!(
            "bottom-left".parse::<PipPosition>().unwrap(),
            PipPosition::BottomLeft
        );
    }

    #[test]
    fn platform_round_trips_and_tolerates_unknown_names() {
        assert_eq!(serde_json::to_string(&Platform::YouTube).unwrap(), "\"youtube\"");
        let p: Platform = serde_json::from_str("\"twitch\"").unwrap();
        assert_eq!(p, Platform::Twitch);
        let p: Platform = serde_json::from_str("\"bilibili\"").unwrap();
        assert_eq!(p, Platform::Unknown);
    }

    #[test]
    fn remote_control_support() {
        assert!(Platform::YouTube.supports_remote_control());
        assert!(Platform::Twitch.supports_remote_control());
        assert!(!Platform::TwitCasting.supports_remote_control());
        assert!(!Platform::Unknown.supports_remote_control());
    }

    #[test]
    fn twitch_player_link_uses_parent() {
        let link = Platform::Twitch.player_link("abc", Some("multiview.example"));
        assert_eq!(
            link,
            "https://player.twitch.tv/?channel=abc&parent=multiview.example"
        );
    }
}

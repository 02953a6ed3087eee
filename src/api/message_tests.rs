//! Tests for message parameters.

use super::message::{Message, Priority};

mod priorities {
    use super::*;

    #[test]
    fn levels_match_api_values() {
        assert_eq!(Priority::Lowest.level(), -2);
        assert_eq!(Priority::Low.level(), -1);
        assert_eq!(Priority::Normal.level(), 0);
        assert_eq!(Priority::High.level(), 1);
        assert_eq!(Priority::Emergency.level(), 2);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn display_uses_the_name() {
        assert_eq!(Priority::Emergency.to_string(), "emergency");
    }
}

mod params {
    use super::*;

    fn lookup<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn body_and_priority_always_present() {
        let params = Message::new("hello").params();

        assert_eq!(lookup(&params, "message"), Some("hello"));
        assert_eq!(lookup(&params, "priority"), Some("0"));
    }

    #[test]
    fn optional_fields_omitted_when_absent() {
        let params = Message::new("hello").params();

        assert_eq!(lookup(&params, "title"), None);
        assert_eq!(lookup(&params, "url"), None);
        assert_eq!(lookup(&params, "url_title"), None);
    }

    #[test]
    fn optional_fields_included_when_set() {
        let params = Message::new("hello")
            .with_title("Backup")
            .with_url("https://status.example.com")
            .with_url_title("status page")
            .with_priority(Priority::High)
            .params();

        assert_eq!(lookup(&params, "title"), Some("Backup"));
        assert_eq!(lookup(&params, "url"), Some("https://status.example.com"));
        assert_eq!(lookup(&params, "url_title"), Some("status page"));
        assert_eq!(lookup(&params, "priority"), Some("1"));
    }

    #[test]
    fn negative_priority_serialized_with_sign() {
        let params = Message::new("hi").with_priority(Priority::Lowest).params();

        assert_eq!(lookup(&params, "priority"), Some("-2"));
    }
}

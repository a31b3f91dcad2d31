// Hardcoded seed data. Order here is display order.

pub(super) static GREETINGS: &[(&str, Option<&str>)] = &[
    ("你", Some("you")),
    ("好", Some("good")),
    ("世", Some("world")),
    ("界", Some("boundary")),
    ("汉", Some("Chinese")),
    ("字", Some("character")),
    ("学", Some("study")),
    ("习", Some("learn")),
    ("美", Some("beautiful")),
    ("丽", Some("pretty")),
    ("朋", Some("friend")),
    ("友", Some("friend")),
];

pub(super) static BASICS: &[(&str, Option<&str>)] = &[
    // numerals
    ("一", None),
    ("二", None),
    ("三", None),
    ("四", None),
    ("五", None),
    ("六", None),
    ("七", None),
    ("八", None),
    ("九", None),
    ("十", None),
    // nature
    ("日", None),
    ("月", None),
    ("山", None),
    ("水", None),
    ("火", None),
    ("木", None),
    ("土", None),
    ("天", None),
    // people and body
    ("人", None),
    ("口", None),
    ("手", None),
    ("目", None),
    ("大", None),
    ("小", None),
];

use super::*;

#[test]
fn thirty_unique_names() {
    assert_eq!(Colormap::ALL.len(), 30);
    let mut names: Vec<&str> = Colormap::ALL.iter().map(|c| c.as_str()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 30);
}

#[test]
fn names_round_trip_through_from_str_and_serde() {
    for c in Colormap::ALL {
        assert_eq!(c.as_str().parse::<Colormap>().unwrap(), *c);
        assert_eq!(
            serde_json::to_value(c).unwrap(),
            serde_json::Value::from(c.as_str())
        );
    }
    assert_eq!(Colormap::RainbowSoft.to_string(), "rainbow-soft");
    assert_eq!(String::from(Colormap::Cool), "cool");
}

#[test]
fn unknown_names_fail_to_parse() {
    assert!("mauve".parse::<Colormap>().is_err());
}

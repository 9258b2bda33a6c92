use rtimegrid::core::grouping::OrderedMultimap;

#[test]
fn test_keys_keep_first_push_order() {
    let map: OrderedMultimap<&str, u32> = [("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)]
        .into_iter()
        .collect();

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(map.get(&"b"), Some(&[1, 3][..]));
    assert_eq!(map.get(&"a"), Some(&[2, 5][..]));
    assert_eq!(map.get(&"z"), None);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_into_iter_and_empty() {
    let mut map = OrderedMultimap::new();
    assert!(map.is_empty());

    map.push("Apollo".to_string(), "r1");
    map.push("apollo".to_string(), "r2");

    let groups: Vec<(String, Vec<&str>)> = map.into_iter().collect();
    assert_eq!(
        groups,
        vec![
            ("Apollo".to_string(), vec!["r1"]),
            ("apollo".to_string(), vec!["r2"]),
        ]
    );
}

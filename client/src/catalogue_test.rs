use super::*;

#[test]
fn group_thousands_small_values_unchanged() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
}

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(125_000), "125,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn find_listing_by_id() {
    let listing = find_listing("3").expect("listing 3 exists");
    assert_eq!(listing.name, "KTM Duke 390");
    assert_eq!(listing.path(), "/product/3");
}

#[test]
fn find_listing_unknown_id_is_none() {
    assert!(find_listing("42").is_none());
    assert!(find_listing("").is_none());
}

#[test]
fn listing_ids_are_unique() {
    let all = listings();
    for (i, a) in all.iter().enumerate() {
        assert!(all[i + 1..].iter().all(|b| b.id != a.id), "duplicate id {}", a.id);
    }
}

#[test]
fn labels_use_grouped_numbers() {
    let listing = find_listing("1").expect("listing 1 exists");
    assert_eq!(listing.price_label(), "₹165,000");
    assert_eq!(listing.km_label(), "12,000 km");
}

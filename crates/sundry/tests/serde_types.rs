use sundry::{Lcg, Pair, Rgba, ShuffleIndexMap};

#[test]
fn pair_round_trips_through_json() {
    let pair = Pair::new(42, "answer".to_string());
    let json = serde_json::to_string(&pair).expect("serializable");
    let back: Pair<i32, String> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, pair);
}

#[test]
fn rgba_round_trips_through_json() {
    let color = Rgba::new(1, 2, 3, 200);
    let json = serde_json::to_string(&color).expect("serializable");
    assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":200}"#);
    let back: Rgba = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, color);
}

#[test]
fn shuffle_index_map_round_trips_through_json() {
    let map = ShuffleIndexMap::random(8, &mut Lcg::with_seed(1));
    let json = serde_json::to_string(&map).expect("serializable");
    let back: ShuffleIndexMap = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, map);
}

use cache::{CacheRegistry, DashCache, Tag};

fn tags(ids: &[&str]) -> Vec<Box<dyn Tag>> {
    ids.iter()
        .map(|id| Box::new(id.to_string()) as Box<dyn Tag>)
        .collect()
}

#[test]
fn read_through_and_invalidate() {
    let registry = CacheRegistry::new();
    registry.ensure_cache("listings", DashCache::<String, String>::new);

    assert_eq!(registry.get::<String, String>("listings", &"jl_1".to_string()), None);

    registry.put(
        "listings",
        "jl_1".to_string(),
        "cached".to_string(),
        tags(&["jobListings", "jobListings-id-jl_1"]),
    );

    assert_eq!(
        registry.get::<String, String>("listings", &"jl_1".to_string()),
        Some("cached".to_string())
    );

    registry.invalidate(&"jobListings-id-jl_1");

    assert_eq!(registry.get::<String, String>("listings", &"jl_1".to_string()), None);
}

#[test]
fn invalidation_spans_namespaces() {
    let registry = CacheRegistry::new();
    registry.ensure_cache("one", DashCache::<String, i64>::new);
    registry.ensure_cache("two", DashCache::<String, i64>::new);

    registry.put("one", "k".to_string(), 1i64, tags(&["shared"]));
    registry.put("two", "k".to_string(), 2i64, tags(&["shared"]));

    registry.invalidate(&"shared");

    assert_eq!(registry.get::<String, i64>("one", &"k".to_string()), None);
    assert_eq!(registry.get::<String, i64>("two", &"k".to_string()), None);
}

#[test]
fn unrelated_namespaces_keep_their_entries() {
    let registry = CacheRegistry::new();
    registry.ensure_cache("one", DashCache::<String, i64>::new);
    registry.ensure_cache("two", DashCache::<String, i64>::new);

    registry.put("one", "k".to_string(), 1i64, tags(&["a"]));
    registry.put("two", "k".to_string(), 2i64, tags(&["b"]));

    registry.invalidate(&"a");

    assert_eq!(registry.get::<String, i64>("one", &"k".to_string()), None);
    assert_eq!(registry.get::<String, i64>("two", &"k".to_string()), Some(2));
}

#[test]
fn put_into_unknown_namespace_is_rejected() {
    let registry = CacheRegistry::new();
    assert!(!registry.put("nope", "k".to_string(), 1i64, tags(&[])));
}

/// Builds a [`KeyValueMap`](crate::KeyValueMap) from `key => value` pairs.
///
/// The map uses the default case-insensitive comparer; later pairs overwrite
/// earlier ones that compare equal.
///
/// # Examples
///
/// ```rust
/// use nini::key_values;
///
/// let map = key_values! {
///     "host" => "localhost",
///     "port" => "8080",
/// };
/// assert_eq!(map.get("HOST"), Some("localhost"));
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! key_values {
    () => {
        $crate::KeyValueMap::default()
    };

    ( $($key:expr => $value:expr),+ $(,)? ) => {{
        let mut map = $crate::KeyValueMap::default();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn empty_map() {
        let map = key_values! {};
        assert!(map.is_empty());
    }

    #[test]
    fn pairs_in_order() {
        let map = key_values! {
            "b" => "2",
            "a" => "1",
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn later_pair_overwrites() {
        let map = key_values! {
            "k" => "1",
            "K" => "2",
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some("2"));
    }
}

//! `PersonalData` implementations for standard library types.
//!
//! Text is filtered, containers are rebuilt element by element into fresh
//! allocations, and everything that cannot hold text is cloned.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    rc::Rc,
    sync::Arc,
    time::Duration,
};

use super::{filter_named, walk, FilterMapper, PersonalData};

// =============================================================================
// Text
// =============================================================================

impl PersonalData for String {
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        mapper.filter_text(self)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn mask_text(&self, mask: &str) -> Option<Self> {
        Some(mask.to_owned())
    }
}

impl PersonalData for Cow<'_, str> {
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        Cow::Owned(mapper.filter_text(self))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn mask_text(&self, mask: &str) -> Option<Self> {
        Some(Cow::Owned(mask.to_owned()))
    }
}

impl PersonalData for Box<str> {
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        mapper.filter_text(self).into_boxed_str()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn mask_text(&self, mask: &str) -> Option<Self> {
        Some(mask.into())
    }
}

// =============================================================================
// Values that hold no text
// =============================================================================

macro_rules! impl_scalar {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl PersonalData for $ty {
                fn filter_with<M: FilterMapper>(&self, _mapper: &M) -> Self {
                    *self
                }

                #[allow(clippy::float_cmp)]
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

impl_scalar!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(0.0 => f32, f64);
impl_scalar!(false => bool);
impl_scalar!('\0' => char);
impl_scalar!(Duration::ZERO => Duration);

macro_rules! impl_opaque {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PersonalData for $ty {
                fn filter_with<M: FilterMapper>(&self, _mapper: &M) -> Self {
                    *self
                }

                fn is_zero(&self) -> bool {
                    false
                }
            }
        )+
    };
}

impl_opaque!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl PersonalData for () {
    fn filter_with<M: FilterMapper>(&self, _mapper: &M) -> Self {}

    fn is_zero(&self) -> bool {
        true
    }
}

impl<T: ?Sized> PersonalData for PhantomData<T> {
    fn filter_with<M: FilterMapper>(&self, _mapper: &M) -> Self {
        PhantomData
    }

    fn is_zero(&self) -> bool {
        true
    }
}

// =============================================================================
// Indirection
// =============================================================================

impl<T> PersonalData for Option<T>
where
    T: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.as_ref().map(|value| walk(value, mapper))
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T, E> PersonalData for Result<T, E>
where
    T: PersonalData,
    E: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        match self {
            Ok(value) => Ok(walk(value, mapper)),
            Err(err) => Err(walk(err, mapper)),
        }
    }

    fn is_zero(&self) -> bool {
        false
    }
}

// Pointers are never zero: a live allocation is walked even when its
// pointee is zero, and the walk then clones the pointee.
macro_rules! impl_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T> PersonalData for $ptr<T>
            where
                T: PersonalData,
            {
                fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
                    $ptr::new(walk(&**self, mapper))
                }

                fn is_zero(&self) -> bool {
                    false
                }
            }
        )+
    };
}

impl_pointer!(Box, Rc, Arc);

// =============================================================================
// Sequences and sets
// =============================================================================

impl<T> PersonalData for Vec<T>
where
    T: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.iter().map(|value| walk(value, mapper)).collect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> PersonalData for VecDeque<T>
where
    T: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.iter().map(|value| walk(value, mapper)).collect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> PersonalData for Box<[T]>
where
    T: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.iter().map(|value| walk(value, mapper)).collect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> PersonalData for [T; N]
where
    T: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.each_ref().map(|value| walk(value, mapper))
    }

    fn is_zero(&self) -> bool {
        self.iter().all(PersonalData::is_zero)
    }
}

// Filtering can map distinct elements to the same text, so a filtered set may
// be smaller than its input.
impl<T, S> PersonalData for HashSet<T, S>
where
    T: PersonalData + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.iter().map(|value| walk(value, mapper)));
        result
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> PersonalData for BTreeSet<T>
where
    T: PersonalData + Ord,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.iter().map(|value| walk(value, mapper)).collect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// =============================================================================
// Maps
// =============================================================================

/// Values under a text key are treated as named by that key.
fn filter_entry<K, V, M>(key: &K, value: &V, mapper: &M) -> V
where
    K: PersonalData,
    V: PersonalData,
    M: FilterMapper,
{
    match key.as_text() {
        Some(name) => filter_named(value, name, mapper),
        None => walk(value, mapper),
    }
}

impl<K, V, S> PersonalData for HashMap<K, V, S>
where
    K: PersonalData + Hash + Eq,
    V: PersonalData,
    S: BuildHasher + Clone,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), filter_entry(key, value, mapper))),
        );
        result
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> PersonalData for BTreeMap<K, V>
where
    K: PersonalData + Ord,
    V: PersonalData,
{
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), filter_entry(key, value, mapper)))
            .collect()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name),+> PersonalData for ($($name,)+)
        where
            $($name: PersonalData,)+
        {
            fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self {
                ($(walk(&self.$idx, mapper),)+)
            }

            fn is_zero(&self) -> bool {
                true $(&& self.$idx.is_zero())+
            }
        }
    };
}

impl_tuple!(A.0);
impl_tuple!(A.0, B.1);
impl_tuple!(A.0, B.1, C.2);
impl_tuple!(A.0, B.1, C.2, D.3);

#[cfg(test)]
mod tests {
    use std::{
        borrow::Cow,
        collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
        net::{IpAddr, Ipv4Addr},
        rc::Rc,
        sync::Arc,
        time::Duration,
    };

    use crate::{PersonalData, PersonalDataFilter};

    const EMAIL: &str = "some@mail.com";

    fn filter() -> PersonalDataFilter {
        PersonalDataFilter::builder().mask("***").build().unwrap()
    }

    #[test]
    fn cow_is_filtered_into_an_owned_value() {
        let value: Cow<'static, str> = Cow::Borrowed("to some@mail.com");
        match filter().remove_personal_data(&value) {
            Cow::Owned(text) => assert_eq!(text, "to ***"),
            Cow::Borrowed(_) => panic!("filtered Cow should be owned"),
        }
    }

    #[test]
    fn boxed_str_is_filtered() {
        let value: Box<str> = EMAIL.into();
        assert_eq!(&*filter().remove_personal_data(&value), "***");
    }

    #[test]
    fn scalars_pass_through() {
        let filter = filter();
        assert_eq!(filter.remove_personal_data(&42_u64), 42);
        assert!((filter.remove_personal_data(&1.5_f64) - 1.5).abs() < f64::EPSILON);
        assert!(filter.remove_personal_data(&true));
        assert_eq!(filter.remove_personal_data(&'@'), '@');
        assert_eq!(
            filter.remove_personal_data(&Duration::from_secs(3)),
            Duration::from_secs(3)
        );
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert_eq!(filter.remove_personal_data(&ip), ip);
    }

    #[test]
    fn scalar_zero_values() {
        assert!(0_i32.is_zero());
        assert!(0.0_f32.is_zero());
        assert!(false.is_zero());
        assert!('\0'.is_zero());
        assert!(Duration::ZERO.is_zero());
        assert!(!1_u8.is_zero());
    }

    #[test]
    fn option_traversal_filters_inner() {
        let filter = filter();
        assert_eq!(
            filter.remove_personal_data(&Some(EMAIL.to_string())),
            Some("***".to_string())
        );
        assert_eq!(filter.remove_personal_data(&None::<String>), None);
    }

    #[test]
    fn result_traversal_filters_ok_and_err() {
        let filter = filter();
        let ok: Result<String, String> = Ok(EMAIL.to_string());
        assert_eq!(filter.remove_personal_data(&ok), Ok("***".to_string()));
        let err: Result<String, String> = Err(format!("bad {EMAIL}"));
        assert_eq!(filter.remove_personal_data(&err), Err("bad ***".to_string()));
    }

    #[test]
    fn pointers_are_freshly_allocated() {
        let filter = filter();

        let shared = Rc::new(EMAIL.to_string());
        let filtered = filter.remove_personal_data(&shared);
        assert!(!Rc::ptr_eq(&shared, &filtered));
        assert_eq!(*filtered, "***");
        assert_eq!(*shared, EMAIL);

        let shared = Arc::new(EMAIL.to_string());
        let filtered = filter.remove_personal_data(&shared);
        assert!(!Arc::ptr_eq(&shared, &filtered));
        assert_eq!(*filtered, "***");

        let boxed = Box::new(EMAIL.to_string());
        assert_eq!(*filter.remove_personal_data(&boxed), "***");
    }

    #[test]
    fn pointer_to_zero_value_is_not_zero() {
        assert!(!Box::new(String::new()).is_zero());
        assert_eq!(*filter().remove_personal_data(&Rc::new(0_u8)), 0);
    }

    #[test]
    fn sequence_traversal_filters_every_element() {
        let filter = filter();
        let values = vec![EMAIL.to_string(), "public".to_string(), String::new()];
        assert_eq!(
            filter.remove_personal_data(&values),
            vec!["***".to_string(), "public".to_string(), String::new()]
        );

        let deque: VecDeque<String> = values.iter().cloned().collect();
        let filtered = filter.remove_personal_data(&deque);
        assert_eq!(filtered.front().map(String::as_str), Some("***"));

        let boxed: Box<[String]> = values.into_boxed_slice();
        assert_eq!(filter.remove_personal_data(&boxed)[0], "***");
    }

    #[test]
    fn array_traversal_filters_every_element() {
        let values = [EMAIL.to_string(), "public".to_string()];
        assert_eq!(
            filter().remove_personal_data(&values),
            ["***".to_string(), "public".to_string()]
        );
        assert!([String::new(), String::new()].is_zero());
    }

    #[test]
    fn set_traversal_filters_elements() {
        let filter = filter();

        let set: HashSet<String> = [EMAIL.to_string(), "public".to_string()].into();
        let filtered = filter.remove_personal_data(&set);
        assert!(filtered.contains("***"));
        assert!(filtered.contains("public"));

        let set: BTreeSet<String> = [EMAIL.to_string(), "public".to_string()].into();
        let filtered = filter.remove_personal_data(&set);
        assert_eq!(
            filtered.into_iter().collect::<Vec<_>>(),
            vec!["***".to_string(), "public".to_string()]
        );
    }

    #[test]
    fn map_values_under_personal_keys_are_masked() {
        let mut map: HashMap<String, String> = HashMap::new();
        map.insert("Email".to_string(), "anything".to_string());
        map.insert("note".to_string(), format!("from {EMAIL}"));
        map.insert("public".to_string(), "public".to_string());

        let filtered = filter().remove_personal_data(&map);
        assert_eq!(filtered["Email"], "***");
        assert_eq!(filtered["note"], "from ***");
        assert_eq!(filtered["public"], "public");
    }

    #[test]
    fn map_keys_are_never_filtered() {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        map.insert(EMAIL.to_string(), "public".to_string());

        let filtered = filter().remove_personal_data(&map);
        assert_eq!(filtered.get(EMAIL).map(String::as_str), Some("public"));
    }

    #[test]
    fn non_text_values_under_personal_keys_are_walked() {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        map.insert("email".to_string(), vec![EMAIL.to_string(), "x".to_string()]);

        let filtered = filter().remove_personal_data(&map);
        assert_eq!(filtered["email"], vec!["***".to_string(), "x".to_string()]);
    }

    #[test]
    fn non_text_keys_walk_their_values() {
        let mut map: BTreeMap<u32, String> = BTreeMap::new();
        map.insert(1, EMAIL.to_string());

        assert_eq!(filter().remove_personal_data(&map)[&1], "***");
    }

    #[test]
    fn tuple_traversal_filters_each_position() {
        let value = (EMAIL.to_string(), 7_u8, Some(EMAIL.to_string()));
        assert_eq!(
            filter().remove_personal_data(&value),
            ("***".to_string(), 7, Some("***".to_string()))
        );
        assert!((String::new(), 0_u8).is_zero());
        assert!(!(String::new(), 1_u8).is_zero());
    }

    #[test]
    fn nested_container_traversal_filters_inner() {
        let values = vec![Some(vec![EMAIL.to_string()])];
        let filtered = filter().remove_personal_data(&values);
        assert_eq!(filtered[0].as_ref().unwrap()[0], "***");
    }
}

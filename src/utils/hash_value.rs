use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::hash::hash;

/// A pre-hashed key, useful when the same string is looked up repeatedly
/// against a uniform-location table.
#[derive(Debug, PartialEq, Eq)]
pub struct HashValue<T>(u64, PhantomData<T>)
where
    T: Hash + ?Sized;

impl<T> Clone for HashValue<T>
where
    T: Hash + ?Sized,
{
    fn clone(&self) -> Self {
        HashValue(self.0, self.1)
    }
}

impl<T> Copy for HashValue<T> where T: Hash + ?Sized {}

impl<T> Hash for HashValue<T>
where
    T: Hash + ?Sized,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.hash(state);
    }
}

impl<F> From<F> for HashValue<str>
where
    F: Borrow<str>,
{
    fn from(v: F) -> Self {
        HashValue(hash(v.borrow()), PhantomData)
    }
}

impl<T> PartialEq<T> for HashValue<str>
where
    T: Borrow<str>,
{
    fn eq(&self, rhs: &T) -> bool {
        hash(rhs.borrow()) == self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hash_str() {
        assert_eq!(HashValue::<str>::from("hash_str"), "hash_str");
    }

    #[test]
    fn collections() {
        let mut set = HashSet::<HashValue<str>>::new();
        set.insert(HashValue::from("glaze_Transform"));
        set.insert(HashValue::from("glaze_Transform"));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(&("glaze_Transform".into())),
            Some(&HashValue::from("glaze_Transform"))
        );
    }
}

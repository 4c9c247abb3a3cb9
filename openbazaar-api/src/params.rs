//! Request parameter mapping.
//!
//! Every endpoint turns its arguments into a [`Params`] list of
//! `(name, value)` pairs. The same list is used as the query string of a GET
//! request and as the `application/x-www-form-urlencoded` body of a POST.
//!
//! Encoding rules:
//!
//! | Rust value        | Wire form                            |
//! |-------------------|--------------------------------------|
//! | `None`            | key omitted                          |
//! | `&str` / `String` | as-is                                |
//! | `bool`            | `true` / `false`                     |
//! | integers, `f64`   | decimal `Display`                    |
//! | `[T]` / `Vec<T>`  | one pair per element (`k=a&k=b`)     |

use url::form_urlencoded;

/// Ordered list of request parameters with absent values already removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key` with `value`, following the encoding rules above.
    #[must_use]
    pub fn with<V: ParamValue>(mut self, key: &'static str, value: V) -> Self {
        value.append_to(key, &mut self.pairs);
        self
    }

    /// In-place variant of [`with`](Self::with).
    pub fn push<V: ParamValue>(&mut self, key: &'static str, value: V) {
        value.append_to(key, &mut self.pairs);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encode the pairs (`a=x&b=y`), as sent on the wire.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

/// A value that can be placed into [`Params`].
pub trait ParamValue {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>);
}

impl ParamValue for str {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        out.push((key, self.to_owned()));
    }
}

impl ParamValue for String {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        out.push((key, self.clone()));
    }
}

impl ParamValue for bool {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        out.push((key, if *self { "true" } else { "false" }.to_owned()));
    }
}

macro_rules! display_param {
    ($($ty:ty),*) => {
        $(
            impl ParamValue for $ty {
                fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
                    out.push((key, self.to_string()));
                }
            }
        )*
    };
}

display_param!(u8, u16, u32, u64, usize, i32, i64, f64);

impl<T: ParamValue + ?Sized> ParamValue for &T {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        (**self).append_to(key, out);
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        if let Some(v) = self {
            v.append_to(key, out);
        }
    }
}

impl<T: ParamValue> ParamValue for [T] {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        for v in self {
            v.append_to(key, out);
        }
    }
}

impl<T: ParamValue> ParamValue for Vec<T> {
    fn append_to(&self, key: &'static str, out: &mut Vec<(&'static str, String)>) {
        self.as_slice().append_to(key, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_values_are_omitted() {
        let p = Params::new().with("a", "x").with("b", None::<&str>);
        assert_eq!(p.encode(), "a=x");
        assert_eq!(p.get("b"), None);
    }

    #[test]
    fn scalars_use_wire_forms() {
        let p = Params::new()
            .with("nsfw", false)
            .with("limit", 20_u32)
            .with("price", 1.5_f64);
        assert_eq!(p.encode(), "nsfw=false&limit=20&price=1.5");
    }

    #[test]
    fn lists_repeat_the_key() {
        let keywords = vec!["shoes".to_owned(), "red".to_owned()];
        let p = Params::new().with("keywords", &keywords);
        assert_eq!(p.encode(), "keywords=shoes&keywords=red");
        assert_eq!(p.get_all("keywords").count(), 2);
    }

    #[test]
    fn values_are_url_encoded() {
        let p = Params::new().with("message", "hi there & bye");
        assert_eq!(p.encode(), "message=hi+there+%26+bye");
    }
}

use serde::Serialize;
use std::borrow::Cow;

/// A value that can be sent as an Alpaca request parameter.
pub trait ASCOMParam {
    /// Encode the value the way Alpaca servers expect it in a query string or form body.
    fn to_param_string(self) -> String;
}

impl ASCOMParam for String {
    fn to_param_string(self) -> String {
        self
    }
}

impl ASCOMParam for &str {
    fn to_param_string(self) -> String {
        self.to_owned()
    }
}

impl ASCOMParam for bool {
    fn to_param_string(self) -> String {
        (if self { "True" } else { "False" }).to_owned()
    }
}

macro_rules! simple_ascom_param {
    ($($ty:ty),*) => {
        $(
            impl ASCOMParam for $ty {
                fn to_param_string(self) -> String {
                    ToString::to_string(&self)
                }
            }
        )*
    };
}

simple_ascom_param!(i32, u32, i64, u64, f64);

/// Ordered list of request parameters.
///
/// Serializes as a sequence of pairs, which is what both the query string and
/// the form body encoders accept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<(Cow<'static, str>, String)>);

impl Params {
    /// Create an empty parameter list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a parameter.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl ASCOMParam) {
        self.0.push((name.into(), value.to_param_string()));
    }

    /// Append a parameter, builder-style.
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl ASCOMParam) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a parameter by name, ignoring case like Alpaca servers do.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parameters tagged with the HTTP method they are sent with.
///
/// GET parameters go into the query string, PUT parameters into the form body.
#[derive(Debug)]
pub(crate) enum ActionParams {
    Get(Params),
    Put(Params),
}

impl ActionParams {
    pub(crate) fn method(&self) -> reqwest::Method {
        match self {
            Self::Get(_) => reqwest::Method::GET,
            Self::Put(_) => reqwest::Method::PUT,
        }
    }

    pub(crate) fn params_mut(&mut self) -> &mut Params {
        match self {
            Self::Get(params) | Self::Put(params) => params,
        }
    }
}

//! Nested parameter-set trees with last-write-wins assignment semantics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfError, ErrorInfo};
use crate::tag::InputTag;

/// Scalar, vector, or nested value stored in a [`Pset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer (seeds, buffer sizes).
    UInt32(u32),
    /// Double precision scalar.
    Double(f64),
    /// String parameter.
    Str(String),
    /// Vector of doubles (limits, thicknesses).
    VDouble(Vec<f64>),
    /// Vector of strings (file names, output commands).
    VString(Vec<String>),
    /// Product reference.
    Tag(InputTag),
    /// Vector of product references.
    VTag(Vec<InputTag>),
    /// Nested parameter set.
    Pset(Pset),
    /// Vector of parameter sets (layer tables).
    VPset(Vec<Pset>),
}

impl Value {
    /// Returns the stable name of the value's type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int32(_) => "int32",
            Value::UInt32(_) => "uint32",
            Value::Double(_) => "double",
            Value::Str(_) => "string",
            Value::VDouble(_) => "vdouble",
            Value::VString(_) => "vstring",
            Value::Tag(_) => "input-tag",
            Value::VTag(_) => "vinput-tag",
            Value::Pset(_) => "pset",
            Value::VPset(_) => "vpset",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::VDouble(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::VString(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::VString(v.into_iter().map(str::to_string).collect())
    }
}

impl From<InputTag> for Value {
    fn from(v: InputTag) -> Self {
        Value::Tag(v)
    }
}

impl From<Vec<InputTag>> for Value {
    fn from(v: Vec<InputTag>) -> Self {
        Value::VTag(v)
    }
}

impl From<Pset> for Value {
    fn from(v: Pset) -> Self {
        Value::Pset(v)
    }
}

impl From<Vec<Pset>> for Value {
    fn from(v: Vec<Pset>) -> Self {
        Value::VPset(v)
    }
}

/// A named value together with its tracking flag.
///
/// Tracked parameters take part in configuration identity; untracked ones are
/// advisory. The distinction is carried as data only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The stored value.
    pub value: Value,
    /// Whether the parameter participates in configuration identity.
    pub tracked: bool,
}

impl Parameter {
    /// Creates a tracked parameter.
    pub fn tracked(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            tracked: true,
        }
    }

    /// Creates an untracked parameter.
    pub fn untracked(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            tracked: false,
        }
    }
}

/// Insertion-ordered mapping from parameter name to [`Parameter`].
///
/// Re-assigning an existing name replaces the stored parameter but keeps the
/// position of the first assignment, matching the sequential overwrite model
/// of the configuration language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pset {
    entries: IndexMap<String, Parameter>,
}

fn missing(name: &str) -> ConfError {
    ConfError::Pset(
        ErrorInfo::new("pset-missing", "parameter not found").with_context("name", name),
    )
}

fn wrong_type(name: &str, wanted: &str, found: &str) -> ConfError {
    ConfError::Pset(
        ErrorInfo::new("pset-type", "parameter has unexpected type")
            .with_context("name", name)
            .with_context("wanted", wanted)
            .with_context("found", found),
    )
}

macro_rules! typed_getter {
    ($(#[$doc:meta])* $fn_name:ident, $variant:ident, $ty:ty, $type_str:expr) => {
        $(#[$doc])*
        pub fn $fn_name(&self, name: &str) -> Result<&$ty, ConfError> {
            match self.entries.get(name) {
                Some(Parameter {
                    value: Value::$variant(v),
                    ..
                }) => Ok(v),
                Some(param) => Err(wrong_type(name, $type_str, param.value.type_name())),
                None => Err(missing(name)),
            }
        }
    };
}

impl Pset {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts a parameter, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, param: Parameter) {
        self.entries.insert(name.into(), param);
    }

    /// Inserts a tracked parameter and returns `self` for chaining.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.insert(name, Parameter::tracked(value));
        self
    }

    /// Inserts an untracked parameter and returns `self` for chaining.
    pub fn set_untracked(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.insert(name, Parameter::untracked(value));
        self
    }

    /// Returns the raw parameter stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(name)
    }

    /// Returns a mutable reference to the parameter stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.entries.get_mut(name)
    }

    /// Removes the parameter stored under `name`, keeping the order of the
    /// remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        self.entries.shift_remove(name)
    }

    /// Whether a parameter of any type exists under `name`.
    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether a parameter exists under `name` with the given type name.
    pub fn exists_as(&self, name: &str, type_name: &str) -> bool {
        self.entries
            .get(name)
            .map(|param| param.value.type_name() == type_name)
            .unwrap_or(false)
    }

    /// Iterates over `(name, parameter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies all entries of `other` into `self`, overwriting clashes.
    pub fn extend(&mut self, other: &Pset) {
        for (name, param) in other.iter() {
            self.insert(name, param.clone());
        }
    }

    typed_getter!(
        /// Returns the boolean stored under `name`.
        get_bool,
        Bool,
        bool,
        "bool"
    );
    typed_getter!(
        /// Returns the signed integer stored under `name`.
        get_int32,
        Int32,
        i32,
        "int32"
    );
    typed_getter!(
        /// Returns the unsigned integer stored under `name`.
        get_uint32,
        UInt32,
        u32,
        "uint32"
    );
    typed_getter!(
        /// Returns the double stored under `name`.
        get_double,
        Double,
        f64,
        "double"
    );
    typed_getter!(
        /// Returns the string stored under `name`.
        get_string,
        Str,
        String,
        "string"
    );
    typed_getter!(
        /// Returns the double vector stored under `name`.
        get_vdouble,
        VDouble,
        Vec<f64>,
        "vdouble"
    );
    typed_getter!(
        /// Returns the string vector stored under `name`.
        get_vstring,
        VString,
        Vec<String>,
        "vstring"
    );
    typed_getter!(
        /// Returns the input tag stored under `name`.
        get_tag,
        Tag,
        InputTag,
        "input-tag"
    );
    typed_getter!(
        /// Returns the input tag vector stored under `name`.
        get_vtag,
        VTag,
        Vec<InputTag>,
        "vinput-tag"
    );
    typed_getter!(
        /// Returns the nested parameter set stored under `name`.
        get_pset,
        Pset,
        Pset,
        "pset"
    );
    typed_getter!(
        /// Returns the parameter-set vector stored under `name`.
        get_vpset,
        VPset,
        Vec<Pset>,
        "vpset"
    );

    /// Returns a mutable reference to the nested set stored under `name`.
    pub fn get_pset_mut(&mut self, name: &str) -> Result<&mut Pset, ConfError> {
        match self.entries.get_mut(name) {
            Some(Parameter {
                value: Value::Pset(inner),
                ..
            }) => Ok(inner),
            Some(param) => Err(wrong_type(name, "pset", param.value.type_name())),
            None => Err(missing(name)),
        }
    }

    /// Appends an element to the string vector stored under `name`.
    pub fn append_vstring(
        &mut self,
        name: &str,
        item: impl Into<String>,
    ) -> Result<(), ConfError> {
        match self.entries.get_mut(name) {
            Some(Parameter {
                value: Value::VString(items),
                ..
            }) => {
                items.push(item.into());
                Ok(())
            }
            Some(param) => Err(wrong_type(name, "vstring", param.value.type_name())),
            None => Err(missing(name)),
        }
    }

    /// Appends an element to the tag vector stored under `name`.
    pub fn append_vtag(&mut self, name: &str, item: InputTag) -> Result<(), ConfError> {
        match self.entries.get_mut(name) {
            Some(Parameter {
                value: Value::VTag(items),
                ..
            }) => {
                items.push(item);
                Ok(())
            }
            Some(param) => Err(wrong_type(name, "vinput-tag", param.value.type_name())),
            None => Err(missing(name)),
        }
    }
}

impl FromIterator<(String, Parameter)> for Pset {
    fn from_iter<T: IntoIterator<Item = (String, Parameter)>>(iter: T) -> Self {
        let mut pset = Pset::new();
        for (name, param) in iter {
            pset.insert(name, param);
        }
        pset
    }
}

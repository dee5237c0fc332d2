//! Parameter Store
//!
//! Name/value parameter table with per-parameter flags. Values are plain
//! numbers; persistence and GCS parameter protocol live with the vehicle.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length (MAVLink param_id is 16 bytes)
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 32;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is read-only (cannot be modified after registration)
        const READ_ONLY = 0b00000001;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Value as f32, converting integers
    pub fn as_f32(&self) -> f32 {
        match *self {
            ParamValue::Int(v) => v as f32,
            ParamValue::Float(v) => v,
        }
    }

    /// Value as i32, truncating floats
    pub fn as_i32(&self) -> i32 {
        match *self {
            ParamValue::Int(v) => v,
            ParamValue::Float(v) => v as i32,
        }
    }
}

type ParamName = String<PARAM_NAME_LEN>;

fn param_key(name: &str) -> Result<ParamName, ParameterError> {
    let mut key = ParamName::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidConfig)?;
    Ok(key)
}

/// Parameter store for configuration management
pub struct ParameterStore {
    values: FnvIndexMap<ParamName, (ParamValue, ParamFlags), MAX_PARAMS>,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            values: FnvIndexMap::new(),
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = param_key(name).ok()?;
        self.values.get(&key).map(|(value, _)| value)
    }

    /// Set parameter value
    ///
    /// The parameter must already be registered and writable.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = param_key(name)?;
        let entry = self
            .values
            .get_mut(&key)
            .ok_or(ParameterError::InvalidConfig)?;

        if entry.1.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }

        entry.0 = value;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = param_key(name)?;
        if self.values.contains_key(&key) {
            return Ok(());
        }

        self.values
            .insert(key, (default_value, flags))
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("RTL_ALT", ParamValue::Int(1500), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("RTL_ALT"), Some(&ParamValue::Int(1500)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_unknown_parameter() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(1)),
            Err(ParameterError::InvalidConfig)
        );
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("RTL_SPEED", ParamValue::Int(0), ParamFlags::empty())
            .unwrap();
        store.set("RTL_SPEED", ParamValue::Int(500)).unwrap();
        store
            .register("RTL_SPEED", ParamValue::Int(0), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("RTL_SPEED"), Some(&ParamValue::Int(500)));
    }

    #[test]
    fn test_read_only_rejected() {
        let mut store = ParameterStore::new();
        store
            .register("FORMAT_VER", ParamValue::Int(1), ParamFlags::READ_ONLY)
            .unwrap();
        assert_eq!(
            store.set("FORMAT_VER", ParamValue::Int(2)),
            Err(ParameterError::ReadOnly)
        );
    }

    #[test]
    fn test_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "THIS_NAME_IS_TOO_LONG",
                ParamValue::Int(0),
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidConfig)
        );
        assert!(store.get("THIS_NAME_IS_TOO_LONG").is_none());
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(ParamValue::Int(250).as_f32(), 250.0);
        assert_eq!(ParamValue::Float(12.9).as_i32(), 12);
    }
}

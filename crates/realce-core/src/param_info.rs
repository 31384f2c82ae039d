//! Parameter introspection for discoverable effect parameters.
//!
//! Index-based access to an effect's parameters, described by
//! [`ParamDescriptor`] records. The enclosing framework uses this to map
//! panel pots onto effects without knowing their concrete types, and the
//! property test suite uses it to sweep every parameter across its range.

/// Display unit of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Unitless value.
    None,
    /// Percentage (0-100).
    Percent,
    /// Frequency in Hz.
    Hertz,
    /// Time in milliseconds.
    Milliseconds,
}

/// Static description of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full display name.
    pub name: &'static str,
    /// Abbreviated name for narrow displays.
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Minimum plain value.
    pub min: f32,
    /// Maximum plain value.
    pub max: f32,
    /// Default plain value.
    pub default: f32,
}

/// Runtime parameter discovery and access.
///
/// Values passed to [`set_param`](Self::set_param) are in the descriptor's
/// plain unit range; implementations clamp out-of-range values.
pub trait ParameterInfo {
    /// Number of parameters.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current plain value of the parameter at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Set the parameter at `index` from a plain value.
    fn set_param(&mut self, index: usize, value: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Volume {
        percent: f32,
    }

    impl ParameterInfo for Volume {
        fn param_count(&self) -> usize {
            1
        }
        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            (index == 0).then_some(ParamDescriptor {
                name: "Volume",
                short_name: "Vol",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
            })
        }
        fn get_param(&self, index: usize) -> f32 {
            if index == 0 { self.percent } else { 0.0 }
        }
        fn set_param(&mut self, index: usize, value: f32) {
            if index == 0 {
                self.percent = value.clamp(0.0, 100.0);
            }
        }
    }

    #[test]
    fn descriptor_roundtrip() {
        let mut v = Volume { percent: 50.0 };
        let desc = v.param_info(0).unwrap();
        v.set_param(0, desc.max + 10.0);
        assert_eq!(v.get_param(0), desc.max);
        assert!(v.param_info(1).is_none());
    }
}

//! Logistic activation with explicit saturation.
//!
//! The activation probability of a unit is `1 / (1 + exp(-input / T))`.
//! As `T` approaches zero the exponent leaves the range `exp` can
//! represent, so the exponent is checked first and out-of-range cases are
//! reported as saturated instead of computed.

/// Largest argument for which `f64::exp` is finite (`ln(f64::MAX)`).
pub const MAX_EXP_ARG: f64 = 709.782712893384;

/// Outcome of evaluating the activation probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Computed normally.
    Normal(f64),
    /// Input strongly positive relative to temperature: probability 1.
    SaturatedHigh,
    /// Input strongly negative relative to temperature: probability 0.
    SaturatedLow,
    /// `input / T` is undefined (zero input at zero temperature): probability 0.5.
    Degenerate,
}

impl Activation {
    /// Evaluates the activation of a unit with total `input` at `temperature`.
    ///
    /// # Examples
    ///
    /// ```
    /// use queen_anneal::boltzmann::Activation;
    ///
    /// assert_eq!(Activation::evaluate(0.0, 1.0).probability(), 0.5);
    /// assert_eq!(Activation::evaluate(8.0, 1e-300), Activation::SaturatedHigh);
    /// assert_eq!(Activation::evaluate(-8.0, 1e-300), Activation::SaturatedLow);
    /// ```
    pub fn evaluate(input: f64, temperature: f64) -> Self {
        let exponent = -input / temperature;

        if exponent.is_nan() {
            Activation::Degenerate
        } else if exponent > MAX_EXP_ARG {
            Activation::SaturatedLow
        } else if exponent < -MAX_EXP_ARG {
            Activation::SaturatedHigh
        } else {
            Activation::Normal(1.0 / (1.0 + exponent.exp()))
        }
    }

    /// Probability that the unit becomes active.
    pub fn probability(self) -> f64 {
        match self {
            Activation::Normal(p) => p,
            Activation::SaturatedHigh => 1.0,
            Activation::SaturatedLow => 0.0,
            Activation::Degenerate => 0.5,
        }
    }

    /// Whether the probability came from a fallback rather than `exp`.
    pub fn is_saturated(self) -> bool {
        !matches!(self, Activation::Normal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_exp_arg_is_exp_boundary() {
        assert!(MAX_EXP_ARG.exp().is_finite());
        assert!((MAX_EXP_ARG + 1e-12).exp().is_infinite());
    }

    #[test]
    fn test_normal_sigmoid() {
        let p = Activation::evaluate(2.0, 1.0).probability();
        assert!((p - 0.880_797_077_977_882_3).abs() < 1e-12);

        let p = Activation::evaluate(-2.0, 2.0).probability();
        assert!((p - 0.268_941_421_369_995_1).abs() < 1e-12);
    }

    #[test]
    fn test_zero_input_is_exactly_half() {
        for t in [1e-300, 1e-10, 1.0, 640.0] {
            assert_eq!(Activation::evaluate(0.0, t), Activation::Normal(0.5));
        }
    }

    #[test]
    fn test_saturates_near_zero_temperature() {
        let t = f64::MIN_POSITIVE;
        assert_eq!(Activation::evaluate(4.0, t).probability(), 1.0);
        assert_eq!(Activation::evaluate(-4.0, t).probability(), 0.0);
        assert_eq!(Activation::evaluate(4.0, t), Activation::SaturatedHigh);
        assert_eq!(Activation::evaluate(-4.0, t), Activation::SaturatedLow);
    }

    #[test]
    fn test_zero_temperature() {
        assert_eq!(Activation::evaluate(0.0, 0.0), Activation::Degenerate);
        assert_eq!(Activation::evaluate(0.0, 0.0).probability(), 0.5);
        assert_eq!(Activation::evaluate(2.0, 0.0), Activation::SaturatedHigh);
        assert_eq!(Activation::evaluate(-2.0, 0.0), Activation::SaturatedLow);
    }

    #[test]
    fn test_boundary() {
        // exponent exactly at the limit is still computed
        let a = Activation::evaluate(-MAX_EXP_ARG, 1.0);
        assert!(matches!(a, Activation::Normal(p) if p > 0.0 && p < 1e-300));
        assert!(!a.is_saturated());

        let a = Activation::evaluate(-MAX_EXP_ARG - 1e-9, 1.0);
        assert_eq!(a, Activation::SaturatedLow);
        assert!(a.is_saturated());
    }

    #[test]
    fn test_never_nan() {
        for input in [-1e308, -4.0, 0.0, 4.0, 1e308] {
            for t in [0.0, 5e-324, 1e-200, 1.0, 1e200] {
                let p = Activation::evaluate(input, t).probability();
                assert!((0.0..=1.0).contains(&p), "p={p} for input={input} t={t}");
            }
        }
    }
}

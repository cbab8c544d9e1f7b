use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for matrix equilibration.
///
/// Construct with [`EquilibrationSettingsBuilder`] to have the values
/// validated, or use `EquilibrationSettings::default()`.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquilibrationSettings<T: FloatT> {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///norm in which rows and columns are balanced
    #[builder(default = "NormType::Two")]
    pub equilibrate_norm: NormType,

    ///norm used to scale the equilibrated matrix to unit size
    #[builder(default = "NormType::Frobenius")]
    pub normalize_norm: NormType,

    ///maximum Sinkhorn-Knopp iterations
    #[builder(default = "50")]
    pub sinkhorn_max_iter: u32,

    ///Sinkhorn-Knopp relative column balance tolerance
    #[builder(default = "(1e-6).as_T()")]
    pub sinkhorn_tol: T,

    ///maximum power iterations for 2-norm estimation
    #[builder(default = "50")]
    pub norm_est_max_iter: u32,

    ///relative tolerance for 2-norm estimation
    #[builder(default = "(1e-3).as_T()")]
    pub norm_est_tol: T,
}

impl<T> Default for EquilibrationSettings<T>
where
    T: FloatT,
{
    fn default() -> EquilibrationSettings<T> {
        EquilibrationSettingsBuilder::<T>::default().build().unwrap()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

impl<T> EquilibrationSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.   Normalization by the
    /// 1-norm is rejected since it treats rows and columns differently.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_normalize_norm(self.normalize_norm)?;
        validate_nonnegative(self.sinkhorn_tol, "sinkhorn_tol")?;
        validate_nonnegative(self.norm_est_tol, "norm_est_tol")?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for EquilibrationSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        EquilibrationSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> EquilibrationSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(normalize_norm) = self.normalize_norm {
            validate_normalize_norm(normalize_norm)?;
        }
        if let Some(tol) = self.sinkhorn_tol {
            validate_nonnegative(tol, "sinkhorn_tol")?;
        }
        if let Some(tol) = self.norm_est_tol {
            validate_nonnegative(tol, "norm_est_tol")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_normalize_norm(norm: NormType) -> Result<(), SettingsError> {
    match norm {
        NormType::Two | NormType::Frobenius => Ok(()),
        NormType::One => Err(SettingsError::BadFieldValue("normalize_norm")),
    }
}

fn validate_nonnegative<T: FloatT>(v: T, field: &'static str) -> Result<(), SettingsError> {
    if v >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    EquilibrationSettingsBuilder::<f64>::default().build().unwrap();

    // 1-norm is fine for balancing ...
    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .equilibrate_norm(NormType::One)
        .build()
        .is_ok());

    // ... but not for normalization
    assert!(EquilibrationSettingsBuilder::<f64>::default()
        .normalize_norm(NormType::One)
        .build()
        .is_err());

    assert!(EquilibrationSettingsBuilder::<f32>::default()
        .sinkhorn_tol(-1.0)
        .build()
        .is_err());

    // directly construct a bad EquilibrationSettings and manually check
    let settings = EquilibrationSettings::<f64> {
        normalize_norm: NormType::One,
        ..EquilibrationSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("normalize_norm"))
    );
}

#[test]
fn test_settings_defaults() {
    let settings = EquilibrationSettings::<f64>::default();
    assert!(!settings.verbose);
    assert_eq!(settings.equilibrate_norm, NormType::Two);
    assert_eq!(settings.normalize_norm, NormType::Frobenius);
    assert_eq!(settings.sinkhorn_max_iter, 50);
    assert_eq!(settings.norm_est_tol, 1e-3);
}

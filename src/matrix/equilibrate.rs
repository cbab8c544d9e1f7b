#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::timers::*;
use std::time::Duration;

/// Summary of an equilibration run
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibrationInfo<T> {
    /// Sinkhorn-Knopp balancing outcome
    pub sinkhorn: SinkhornInfo<T>,
    /// norm of the balanced matrix before normalization
    pub norm: T,
    /// time spent in equilibration
    pub equil_time: Duration,
}

impl<'a, T> MatrixSparse<'a, T>
where
    T: FloatT,
{
    // Sinkhorn-Knopp equilibration followed by normalization.
    //
    // On success the stored matrix is Diagonal(d)*A*Diagonal(e), with
    // A the matrix at entry, and has unit norm in `normalize_norm`.
    pub(crate) fn equilibrate(
        &mut self,
        d: &mut [T],
        e: &mut [T],
    ) -> Result<EquilibrationInfo<T>, MatrixError> {
        // all failure modes are checked before anything is modified
        if !self.is_initialized() {
            return Err(state_error(MatrixError::NotInitialized));
        }
        if self.settings.normalize_norm == NormType::One {
            return Err(MatrixError::InvalidPolicy(NormType::One));
        }
        assert_eq!(d.len(), self.rows());
        assert_eq!(e.len(), self.cols());

        // A := f(A) with f = |A| or f = |A|.^2, keeping the signs
        let transform = if self.settings.equilibrate_norm.is_squared() {
            MagnitudeTransform::Square
        } else {
            MagnitudeTransform::Abs
        };

        let mut timers = self.timers.take().unwrap_or_default();
        let before = timers.elapsed("equilibrate");

        // errors are propagated only after the timer has stopped
        let result;
        timeit! {timers => "equilibrate"; {
            result = self.equilibrate_inner(d, e, transform, &mut timers);
        }}
        let equil_time = timers.elapsed("equilibrate").saturating_sub(before);

        self.timers.replace(timers);
        let (sinkhorn, norm) = result?;
        let info = EquilibrationInfo {
            sinkhorn,
            norm,
            equil_time,
        };

        // output errors don't invalidate the scaling
        let _ = self.print_equilibration(&info, d, e);

        Ok(info)
    }

    fn equilibrate_inner(
        &mut self,
        d: &mut [T],
        e: &mut [T],
        transform: MagnitudeTransform,
        timers: &mut Timers,
    ) -> Result<(SinkhornInfo<T>, T), MatrixError> {
        let settings = self.settings.clone();

        let signs = self.store_mut()?.extract_signs(transform);

        let sinkhorn;
        timeit! {timers => "sinkhorn"; {
            sinkhorn = sinkhorn_knopp(
                &*self,
                d,
                e,
                settings.sinkhorn_max_iter,
                settings.sinkhorn_tol,
            );
        }}
        let sinkhorn = sinkhorn?;

        let store = self.store_mut()?;

        // A := sign(A) .* f^{-1}(A)
        store.restore_signs(&signs, transform);

        // the balancing ran on squared values, so the
        // scalings for A itself are the square roots
        if transform == MagnitudeTransform::Square {
            d.sqrt();
            e.sqrt();
        }

        // A := D*A*E
        store.lrscale(d, e);

        let normA;
        timeit! {timers => "normalize"; {
            normA = self.normalize(d, e, &settings);
        }}

        Ok((sinkhorn, normA?))
    }

    // A := A/normA, with d and e absorbing 1/sqrt(normA) each
    fn normalize(
        &mut self,
        d: &mut [T],
        e: &mut [T],
        settings: &EquilibrationSettings<T>,
    ) -> Result<T, MatrixError> {
        let normA = norm_est(settings.normalize_norm, &*self, settings)?;

        // nothing to normalize for an empty or all zero matrix
        if normA > T::zero() && normA.is_finite() {
            self.store_mut()?.scale(normA.recip());
            let c = T::recip(T::sqrt(normA));
            d.scale(c);
            e.scale(c);
        }
        Ok(normA)
    }
}

/// Estimates a norm of a sparse matrix.
///
/// `NormType::Frobenius` gives `||A||_F / sqrt(min(m,n))`, and
/// `NormType::Two` a power iteration estimate of the largest singular
/// value.  The 1-norm is not supported since it treats rows and columns
/// differently.
pub fn norm_est<T: FloatT>(
    norm: NormType,
    A: &MatrixSparse<'_, T>,
    settings: &EquilibrationSettings<T>,
) -> Result<T, MatrixError> {
    match norm {
        NormType::Two => norm2_est(A, settings.norm_est_max_iter, settings.norm_est_tol),
        NormType::Frobenius => {
            let dim: T = usize::min(A.rows(), A.cols()).as_T();
            Ok(A.data()?.norm() / T::sqrt(dim))
        }
        NormType::One => Err(MatrixError::InvalidPolicy(norm)),
    }
}

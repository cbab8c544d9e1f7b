use super::*;
use crate::algebra::*;
use std::io::Write;

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

impl<'a, T> MatrixSparse<'a, T>
where
    T: FloatT,
{
    pub(crate) fn print_equilibration(
        &mut self,
        info: &EquilibrationInfo<T>,
        d: &[T],
        e: &[T],
    ) -> std::io::Result<()> {
        if !self.settings.verbose {
            return std::io::Result::Ok(());
        }

        let (m, n, nnz, order) = (self.rows(), self.cols(), self.nnz(), self.order());
        let settings = &self.settings;
        let out = &mut self.stream;

        writeln!(out, "\nequilibration:")?;
        writeln!(out, "  rows          = {}", m)?;
        writeln!(out, "  cols          = {}", n)?;
        writeln!(out, "  nnz           = {}", nnz)?;
        writeln!(out, "  order         = {}", order)?;
        writeln!(
            out,
            "  norms         = {} (balance), {} (normalize)",
            settings.equilibrate_norm, settings.normalize_norm
        )?;

        let sk = &info.sinkhorn;
        writeln!(
            out,
            "  sinkhorn      = {} iterations, converged = {}, residual = {}",
            sk.iterations,
            sk.converged,
            expformat!("{:.2e}", sk.residual)
        )?;
        writeln!(out, "  norm(A)       = {}", expformat!("{:.4e}", info.norm))?;
        writeln!(
            out,
            "  d range       = [{}, {}]",
            expformat!("{:.2e}", d.minimum()),
            expformat!("{:.2e}", d.maximum())
        )?;
        writeln!(
            out,
            "  e range       = [{}, {}]",
            expformat!("{:.2e}", e.minimum()),
            expformat!("{:.2e}", e.maximum())
        )?;
        writeln!(out, "  time          = {:?}", info.equil_time)?;
        out.flush()?;

        std::io::Result::Ok(())
    }
}

// Rust prints 1e-3 as "1e-3".  Pads the exponent
// to two digits with a sign, i.e. "1e-03"
fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');
    let digits = thestr.len() - eidx - 1 - usize::from(has_sign);

    let chars = match (has_sign, digits == 1) {
        (false, true) => "+0",
        (false, false) => "+",
        (true, true) => "0",
        (true, false) => "",
    };

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1e-3)), "1.00e-03");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 2.5e4)), "2.50e+04");
    assert_eq!(_exp_str_reformat(format!("{:.1e}", 1e-12)), "1.0e-12");
    assert_eq!(_exp_str_reformat(format!("{:.1e}", 3e100)), "3.0e+100");
    assert_eq!(_exp_str_reformat("inf".to_string()), "inf");
}

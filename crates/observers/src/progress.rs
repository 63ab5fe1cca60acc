//! A text observer that reports one line per iteration.

use std::io::{self, Write};

use descent_core::Observer;

use crate::traits::{HasGradientNorm, HasIteration, HasObjective};

/// Writes a progress line for every solver iteration.
///
/// Each event produces one line of the form
///
/// ```text
/// iter_number = <k> norm_grad = <‖∇f(x)‖> fun_val = <f(x)>
/// ```
///
/// Numbers are printed with [`format_float`]: shortest round-trip digits,
/// always with a decimal point or exponent, so `0.0` and `1e-05` rather than
/// `0` and `0.00001`.
///
/// Lines go to standard error by default; use [`ProgressWriter::new`] to
/// write them anywhere that implements [`io::Write`]. Write failures are
/// ignored, so reporting never interrupts a solve.
///
/// The solvers take their observer by value. Pass `&mut writer` to keep the
/// writer around after the solve, for example to inspect a buffer.
#[derive(Debug)]
pub struct ProgressWriter<W: Write = io::Stderr> {
    writer: W,
}

impl ProgressWriter<io::Stderr> {
    /// Creates a writer that reports to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for ProgressWriter<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write> ProgressWriter<W> {
    /// Creates a writer that reports to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the observer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn report<E>(&mut self, event: &E)
    where
        E: HasIteration + HasGradientNorm + HasObjective,
    {
        let _ = writeln!(
            self.writer,
            "iter_number = {} norm_grad = {} fun_val = {}",
            event.iteration(),
            format_float(event.gradient_norm()),
            format_float(event.objective()),
        );
    }
}

/// Formats a float the way progress lines print it.
///
/// Uses the shortest digits that round-trip. Magnitudes in `[1e-4, 1e16)` and
/// zero are positional with at least one fractional digit (`2.0`, `0.0001`).
/// Others use scientific notation with a signed exponent of at least two
/// digits (`1e-05`, `1.5e+16`). Non-finite values print as `nan`, `inf` and
/// `-inf`.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
        .unwrap_or((scientific.as_str(), 0));

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') {
            positional
        } else {
            positional + ".0"
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

impl<W, E, A> Observer<E, A> for ProgressWriter<W>
where
    W: Write,
    E: HasIteration + HasGradientNorm + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.report(event);
        None
    }
}

impl<W, E, A> Observer<E, A> for &mut ProgressWriter<W>
where
    W: Write,
    E: HasIteration + HasGradientNorm + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.report(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_core::QuadraticForm;
    use descent_solvers::optimization::quadratic;
    use nalgebra::{DMatrix, DVector, dvector};

    struct Record {
        iter: usize,
        gradient_norm: f64,
        objective: f64,
    }

    impl HasIteration for Record {
        fn iteration(&self) -> usize {
            self.iter
        }
    }

    impl HasGradientNorm for Record {
        fn gradient_norm(&self) -> f64 {
            self.gradient_norm
        }
    }

    impl HasObjective for Record {
        fn objective(&self) -> f64 {
            self.objective
        }
    }

    /// A writer that always fails.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn formats_one_line_per_event() {
        let mut writer = ProgressWriter::new(Vec::new());

        let _: Option<()> = writer.observe(&Record {
            iter: 1,
            gradient_norm: 0.5,
            objective: 2.25,
        });
        let _: Option<()> = writer.observe(&Record {
            iter: 2,
            gradient_norm: 0.125,
            objective: -1.0,
        });

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            "iter_number = 1 norm_grad = 0.5 fun_val = 2.25\n\
             iter_number = 2 norm_grad = 0.125 fun_val = -1.0\n"
        );
    }

    #[test]
    fn floats_keep_a_decimal_point_or_exponent() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(-1.0), "-1.0");
        assert_eq!(format_float(2.25), "2.25");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(123_456.0), "123456.0");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn small_and_large_floats_use_scientific_notation() {
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(2.5e-123), "2.5e-123");
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn write_failures_are_ignored() {
        let mut writer = ProgressWriter::new(Broken);

        let action: Option<()> = writer.observe(&Record {
            iter: 1,
            gradient_norm: 1.0,
            objective: 1.0,
        });

        assert!(action.is_none());
    }

    #[test]
    fn reports_every_quadratic_iteration() {
        let form = QuadraticForm::new(DMatrix::identity(2, 2), DVector::zeros(2));
        let config = quadratic::Config::default();
        let mut writer = ProgressWriter::new(Vec::new());

        let solution = quadratic::minimize(&form, dvector![1.0, -1.0], &config, &mut writer)
            .expect("identity form converges");

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(solution.iters, 1);
        assert_eq!(text, "iter_number = 1 norm_grad = 0.0 fun_val = 0.0\n");
    }
}

#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::timers::*;
use std::fs::File;
use std::io::Write;

/// Storage lifecycle of a [`MatrixSparse`]
#[derive(Debug)]
pub(crate) enum MatrixState<'a, T> {
    /// caller data borrowed at construction, not yet copied
    Unbuilt(RawInput<'a, T>),
    /// owned row and column forms
    Built(DualStore<T>),
}

/// Sparse matrix for first-order solvers.
///
/// The matrix borrows the caller's compressed sparse arrays at
/// construction, and copies them into a [`DualStore`] holding both a row
/// and a column major form when [`init`](Matrix::init) is called.  After
/// that the borrow is released.
///
/// __Example usage__ :
/// ```no_run
/// use dualsparse::algebra::{MatrixOrder, MatrixShape};
/// use dualsparse::matrix::{Matrix, MatrixSparse};
///
/// // A = [2. 0. 1.]
/// //     [0. 3. 0.]
/// //     [4. 0. 5.]
/// let ptr = [0, 2, 3, 5];
/// let ind = [0, 2, 1, 0, 2];
/// let val = [2., 1., 3., 4., 5.];
///
/// let mut A = MatrixSparse::new(MatrixOrder::Row, 3, 3, 5, &val, &ptr, &ind);
/// A.init().unwrap();
///
/// let x = [1., 1., 1.];
/// let mut y = [0.; 3];
/// A.mul(MatrixShape::N, 1., &x, 0., &mut y).unwrap();
/// assert_eq!(y, [3., 3., 9.]);
///
/// let mut d = [0.; 3];
/// let mut e = [0.; 3];
/// A.equil(&mut d, &mut e).unwrap();
/// ```
pub struct MatrixSparse<'a, T: FloatT = f64> {
    m: usize,
    n: usize,
    nnz: usize,
    order: MatrixOrder,
    pub(crate) state: MatrixState<'a, T>,
    pub(crate) settings: EquilibrationSettings<T>,
    pub(crate) stream: PrintTarget,
    // Option so that timers can be taken out while
    // the rest of the matrix is borrowed mutably
    pub(crate) timers: Option<Timers>,
}

impl<'a, T> MatrixSparse<'a, T>
where
    T: FloatT,
{
    /// Creates an unbuilt matrix borrowing compressed sparse data in
    /// `order`, using default equilibration settings.
    ///
    /// The data is not checked until [`init`](Matrix::init), which
    /// returns [`MatrixError::BadFormat`] for malformed arrays.
    pub fn new(
        order: MatrixOrder,
        m: usize,
        n: usize,
        nnz: usize,
        values: &'a [T],
        ptr: &'a [usize],
        ind: &'a [usize],
    ) -> Self {
        Self::with_settings(
            order,
            m,
            n,
            nnz,
            values,
            ptr,
            ind,
            EquilibrationSettings::default(),
        )
    }

    /// As [`new`](Self::new), with user supplied settings.
    #[allow(clippy::too_many_arguments)]
    pub fn with_settings(
        order: MatrixOrder,
        m: usize,
        n: usize,
        nnz: usize,
        values: &'a [T],
        ptr: &'a [usize],
        ind: &'a [usize],
        settings: EquilibrationSettings<T>,
    ) -> Self {
        let raw = RawInput {
            order,
            m,
            n,
            nnz,
            values,
            ptr,
            ind,
        };

        Self {
            m,
            n,
            nnz,
            order,
            state: MatrixState::Unbuilt(raw),
            settings,
            stream: PrintTarget::default(),
            timers: Some(Timers::default()),
        }
    }

    /// A fresh unbuilt matrix over the same borrowed arrays, with a copy
    /// of the settings.  Returns `None` once this matrix has been built,
    /// since the borrow has been released by then.
    pub fn unbuilt_clone(&self) -> Option<MatrixSparse<'a, T>> {
        match &self.state {
            MatrixState::Unbuilt(raw) => Some(Self::with_settings(
                raw.order,
                raw.m,
                raw.n,
                raw.nnz,
                raw.values,
                raw.ptr,
                raw.ind,
                self.settings.clone(),
            )),
            MatrixState::Built(_) => None,
        }
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// storage order of the input data
    pub fn order(&self) -> MatrixOrder {
        self.order
    }

    /// equilibration settings
    pub fn settings(&self) -> &EquilibrationSettings<T> {
        &self.settings
    }

    /// Replaces the equilibration settings after validating them.
    pub fn update_settings(&mut self, settings: EquilibrationSettings<T>) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Both stored forms of the matrix.
    pub fn store(&self) -> Result<&DualStore<T>, MatrixError> {
        match &self.state {
            MatrixState::Built(store) => Ok(store),
            MatrixState::Unbuilt(_) => Err(state_error(MatrixError::NotInitialized)),
        }
    }

    pub(crate) fn store_mut(&mut self) -> Result<&mut DualStore<T>, MatrixError> {
        match &mut self.state {
            MatrixState::Built(store) => Ok(store),
            MatrixState::Unbuilt(_) => Err(state_error(MatrixError::NotInitialized)),
        }
    }

    /// Stored values in the input storage order
    pub fn data(&self) -> Result<&[T], MatrixError> {
        Ok(&self.store()?.primary().val)
    }

    /// Stored pointer array in the input storage order
    pub fn ptr(&self) -> Result<&[usize], MatrixError> {
        Ok(&self.store()?.primary().ptr)
    }

    /// Stored index array in the input storage order
    pub fn ind(&self) -> Result<&[usize], MatrixError> {
        Ok(&self.store()?.primary().ind)
    }

    /// Time spent in `init` and `equil` so far
    pub fn total_time(&self) -> std::time::Duration {
        self.timers
            .as_ref()
            .map_or(std::time::Duration::ZERO, |t| t.total_time())
    }
}

impl<'a, T> Matrix<T> for MatrixSparse<'a, T>
where
    T: FloatT,
{
    fn rows(&self) -> usize {
        self.m
    }

    fn cols(&self) -> usize {
        self.n
    }

    fn is_initialized(&self) -> bool {
        matches!(self.state, MatrixState::Built(_))
    }

    fn init(&mut self) -> Result<(), MatrixError> {
        let raw = match &self.state {
            MatrixState::Built(_) => return Err(state_error(MatrixError::AlreadyInitialized)),
            MatrixState::Unbuilt(raw) => *raw,
        };
        raw.check_format()?;

        let mut timers = self.timers.take().unwrap_or_default();
        let store;
        timeit! {timers => "init"; {
            store = DualStore::new(&raw);
        }}
        self.timers.replace(timers);

        // releases the borrow of the caller's arrays
        self.state = MatrixState::Built(store);
        Ok(())
    }

    fn mul(
        &self,
        trans: MatrixShape,
        alpha: T,
        x: &[T],
        beta: T,
        y: &mut [T],
    ) -> Result<(), MatrixError> {
        let store = self.store()?;

        let (xlen, ylen) = match trans {
            MatrixShape::N => (self.n, self.m),
            MatrixShape::T => (self.m, self.n),
        };
        assert_eq!(x.len(), xlen);
        assert_eq!(y.len(), ylen);

        store.gemv(trans, y, x, alpha, beta);
        Ok(())
    }

    fn equil(&mut self, d: &mut [T], e: &mut [T]) -> Result<EquilibrationInfo<T>, MatrixError> {
        self.equilibrate(d, e)
    }
}

impl<'a, T> ConfigurablePrintTarget for MatrixSparse<'a, T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

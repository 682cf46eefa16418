//! Real-to-complex and complex-to-real transform executors.
//!
//! An executor owns fixed-size input and output buffers together with a plan
//! bound to one transform length. Usage follows three steps which may be
//! repeated any number of times:
//!
//! 1. load the input buffer ([`RealToComplexExecutor::set_input_zeropadded`] or
//!    [`ComplexToRealExecutor::set_input`]),
//! 2. run [`execute`](RealToComplexExecutor::execute),
//! 3. read the output buffer.
//!
//! A real signal of length `n` has a spectrum of `n/2 + 1` non-redundant bins.
//! The inverse transform is **unnormalized**: its output is `n` times the
//! signal that produced the spectrum.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};

use crate::error::ConvError;
use crate::num::{
    complex_zero, half_spectrum_len, zero, Complex, ComplexSequence, FftNum, RealSequence,
};

/// Maximum number of transform lengths retained per direction in a
/// [`TransformPlanner`].
pub const MAX_CACHE_ENTRIES: usize = 64;

/// Forward transform of a real sequence into its half-spectrum.
pub struct RealToComplexExecutor<T: FftNum> {
    plan: Arc<dyn RealToComplex<T>>,
    input: Vec<T>,
    output: Vec<Complex<T>>,
    /// Copy of `input` handed to the backend, which uses it as scratch space.
    work: Vec<T>,
    scratch: Vec<Complex<T>>,
}

impl<T: FftNum> RealToComplexExecutor<T> {
    /// Create an executor for transforms of `input_size` real samples.
    ///
    /// # Errors
    ///
    /// [`ConvError::EmptyInput`] if `input_size` is zero.
    pub fn new(input_size: usize) -> Result<Self, ConvError> {
        if input_size == 0 {
            return Err(ConvError::EmptyInput);
        }
        let plan = RealFftPlanner::<T>::new().plan_fft_forward(input_size);
        Ok(Self::from_plan(plan))
    }

    /// Create an executor whose plan is taken from `planner`'s cache.
    pub fn with_planner(
        planner: &mut TransformPlanner<T>,
        input_size: usize,
    ) -> Result<Self, ConvError> {
        let plan = planner.plan_forward(input_size)?;
        Ok(Self::from_plan(plan))
    }

    fn from_plan(plan: Arc<dyn RealToComplex<T>>) -> Self {
        let n = plan.len();
        debug!("r2c executor: {} samples -> {} bins", n, half_spectrum_len(n));
        Self {
            input: vec![zero(); n],
            output: vec![complex_zero(); half_spectrum_len(n)],
            work: plan.make_input_vec(),
            scratch: plan.make_scratch_vec(),
            plan,
        }
    }

    /// Number of real samples consumed per transform.
    pub fn input_size(&self) -> usize {
        self.input.len()
    }

    /// Number of complex bins produced per transform (`input_size / 2 + 1`).
    pub fn output_size(&self) -> usize {
        self.output.len()
    }

    /// Copy `samples` to the start of the input buffer and zero the rest.
    ///
    /// # Errors
    ///
    /// [`ConvError::InputTooLong`] if `samples` does not fit; the input buffer
    /// is left unchanged in that case.
    pub fn set_input_zeropadded(&mut self, samples: &[T]) -> Result<(), ConvError> {
        if samples.len() > self.input.len() {
            return Err(ConvError::InputTooLong {
                len: samples.len(),
                capacity: self.input.len(),
            });
        }
        let (head, tail) = self.input.split_at_mut(samples.len());
        head.copy_from_slice(samples);
        tail.fill(zero());
        Ok(())
    }

    /// Run the forward transform from the input buffer into the output buffer.
    ///
    /// The input buffer is not modified, so executing twice without reloading
    /// produces the same spectrum.
    pub fn execute(&mut self) -> Result<(), ConvError> {
        self.work.copy_from_slice(&self.input);
        self.plan
            .process_with_scratch(&mut self.work, &mut self.output, &mut self.scratch)
            .map_err(ConvError::backend)
    }

    /// Load `samples` zero-padded, execute, and borrow the resulting spectrum.
    pub fn transform(&mut self, samples: &[T]) -> Result<&[Complex<T>], ConvError> {
        self.set_input_zeropadded(samples)?;
        self.execute()?;
        Ok(&self.output)
    }

    /// Current contents of the input buffer.
    pub fn input(&self) -> &[T] {
        &self.input
    }

    /// Spectrum written by the last [`execute`](Self::execute).
    pub fn output(&self) -> &[Complex<T>] {
        &self.output
    }

    /// Owned copy of the output buffer.
    pub fn get_output(&self) -> ComplexSequence<T> {
        self.output.clone()
    }
}

impl<T: FftNum> fmt::Debug for RealToComplexExecutor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealToComplexExecutor")
            .field("input_size", &self.input_size())
            .field("output_size", &self.output_size())
            .finish()
    }
}

/// Inverse transform of a half-spectrum back into a real sequence.
pub struct ComplexToRealExecutor<T: FftNum> {
    plan: Arc<dyn ComplexToReal<T>>,
    input: Vec<Complex<T>>,
    output: Vec<T>,
    /// Copy of `input` handed to the backend, which uses it as scratch space.
    work: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: FftNum> ComplexToRealExecutor<T> {
    /// Create an executor producing `output_size` real samples.
    ///
    /// # Errors
    ///
    /// [`ConvError::EmptyInput`] if `output_size` is zero.
    pub fn new(output_size: usize) -> Result<Self, ConvError> {
        if output_size == 0 {
            return Err(ConvError::EmptyInput);
        }
        let plan = RealFftPlanner::<T>::new().plan_fft_inverse(output_size);
        Ok(Self::from_plan(plan))
    }

    /// Create an executor whose plan is taken from `planner`'s cache.
    pub fn with_planner(
        planner: &mut TransformPlanner<T>,
        output_size: usize,
    ) -> Result<Self, ConvError> {
        let plan = planner.plan_inverse(output_size)?;
        Ok(Self::from_plan(plan))
    }

    fn from_plan(plan: Arc<dyn ComplexToReal<T>>) -> Self {
        let n = plan.len();
        debug!("c2r executor: {} bins -> {} samples", half_spectrum_len(n), n);
        Self {
            input: vec![complex_zero(); half_spectrum_len(n)],
            output: vec![zero(); n],
            work: plan.make_input_vec(),
            scratch: plan.make_scratch_vec(),
            plan,
        }
    }

    /// Number of complex bins consumed per transform (`output_size / 2 + 1`).
    pub fn input_size(&self) -> usize {
        self.input.len()
    }

    /// Number of real samples produced per transform.
    pub fn output_size(&self) -> usize {
        self.output.len()
    }

    /// Copy `spectrum` into the input buffer.
    ///
    /// # Errors
    ///
    /// [`ConvError::LengthMismatch`] unless `spectrum.len()` equals
    /// [`input_size`](Self::input_size) exactly.
    pub fn set_input(&mut self, spectrum: &[Complex<T>]) -> Result<(), ConvError> {
        if spectrum.len() != self.input.len() {
            return Err(ConvError::LengthMismatch {
                arg: "spectrum",
                expected: self.input.len(),
                got: spectrum.len(),
            });
        }
        self.input.copy_from_slice(spectrum);
        Ok(())
    }

    /// Run the inverse transform. The output is scaled by
    /// [`output_size`](Self::output_size).
    ///
    /// The imaginary parts of the DC bin, and of the Nyquist bin when the
    /// output size is even, do not contribute to a real signal and are ignored.
    pub fn execute(&mut self) -> Result<(), ConvError> {
        self.work.copy_from_slice(&self.input);
        self.work[0].im = zero();
        if self.output.len() % 2 == 0 {
            if let Some(nyquist) = self.work.last_mut() {
                nyquist.im = zero();
            }
        }
        self.plan
            .process_with_scratch(&mut self.work, &mut self.output, &mut self.scratch)
            .map_err(ConvError::backend)
    }

    /// Load `spectrum`, execute, and borrow the unnormalized result.
    pub fn transform(&mut self, spectrum: &[Complex<T>]) -> Result<&[T], ConvError> {
        self.set_input(spectrum)?;
        self.execute()?;
        Ok(&self.output)
    }

    /// Current contents of the input buffer.
    pub fn input(&self) -> &[Complex<T>] {
        &self.input
    }

    /// Writable view of the input buffer, for producing a spectrum in place.
    pub fn input_mut(&mut self) -> &mut [Complex<T>] {
        &mut self.input
    }

    /// Unnormalized samples written by the last [`execute`](Self::execute).
    pub fn output(&self) -> &[T] {
        &self.output
    }

    /// Owned copy of the output buffer.
    pub fn get_output(&self) -> RealSequence<T> {
        self.output.clone()
    }
}

impl<T: FftNum> fmt::Debug for ComplexToRealExecutor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplexToRealExecutor")
            .field("input_size", &self.input_size())
            .field("output_size", &self.output_size())
            .finish()
    }
}

/// Plans keyed by transform length, evicted in least-recently-used order.
struct PlanCache<P: ?Sized> {
    plans: HashMap<usize, Arc<P>>,
    order: VecDeque<usize>,
}

impl<P: ?Sized> PlanCache<P> {
    fn new() -> Self {
        Self {
            plans: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get_or_insert_with(&mut self, len: usize, build: impl FnOnce() -> Arc<P>) -> Arc<P> {
        if let Some(plan) = self.plans.get(&len) {
            let plan = Arc::clone(plan);
            trace!("plan cache hit for length {}", len);
            self.order.retain(|&x| x != len);
            self.order.push_back(len);
            return plan;
        }
        if self.plans.len() == MAX_CACHE_ENTRIES {
            if let Some(old) = self.order.pop_front() {
                debug!("evicting plan for length {}", old);
                self.plans.remove(&old);
            }
        }
        trace!("plan cache miss for length {}", len);
        let plan = build();
        self.plans.insert(len, Arc::clone(&plan));
        self.order.push_back(len);
        plan
    }

    fn len(&self) -> usize {
        self.plans.len()
    }
}

/// Shares transform plans between executors of the same length.
///
/// Planning is the only step that needs exclusive access; the plans handed
/// out are immutable and can be used from executors on different threads.
/// At most [`MAX_CACHE_ENTRIES`] lengths are retained per direction.
pub struct TransformPlanner<T: FftNum> {
    forward: PlanCache<dyn RealToComplex<T>>,
    inverse: PlanCache<dyn ComplexToReal<T>>,
}

impl<T: FftNum> Default for TransformPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FftNum> TransformPlanner<T> {
    /// Create an empty planner.
    pub fn new() -> Self {
        Self {
            forward: PlanCache::new(),
            inverse: PlanCache::new(),
        }
    }

    /// Retrieve or build the forward plan for `len` real samples.
    pub fn plan_forward(&mut self, len: usize) -> Result<Arc<dyn RealToComplex<T>>, ConvError> {
        if len == 0 {
            return Err(ConvError::EmptyInput);
        }
        Ok(self
            .forward
            .get_or_insert_with(len, || RealFftPlanner::<T>::new().plan_fft_forward(len)))
    }

    /// Retrieve or build the inverse plan producing `len` real samples.
    pub fn plan_inverse(&mut self, len: usize) -> Result<Arc<dyn ComplexToReal<T>>, ConvError> {
        if len == 0 {
            return Err(ConvError::EmptyInput);
        }
        Ok(self
            .inverse
            .get_or_insert_with(len, || RealFftPlanner::<T>::new().plan_fft_inverse(len)))
    }

    /// Number of lengths with a cached forward plan.
    pub fn forward_cache_len(&self) -> usize {
        self.forward.len()
    }

    /// Number of lengths with a cached inverse plan.
    pub fn inverse_cache_len(&self) -> usize {
        self.inverse.len()
    }
}

impl<T: FftNum> fmt::Debug for TransformPlanner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformPlanner")
            .field("forward", &self.forward.order)
            .field("inverse", &self.inverse.order)
            .finish()
    }
}

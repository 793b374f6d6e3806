/*
Serial Composition (Through)
============================

The primitives in `dsp` never call each other. A consumer chains them by
feeding one output into the next input:

    let mut chain = Scaler::new(..)
        .through(Hysteresis::new(..))
        .through(Clipper::new(..));

    let y = chain.process(x);

    x ──→ [Scaler] ──→ [Hysteresis] ──→ [Clipper] ──→ y

Order matters. Clipping after smoothing bounds the final value; clipping
before smoothing bounds what the smoother sees.
*/

/// A single-sample processor.
pub trait Processor {
    fn process(&mut self, value: f64) -> f64;

    /// Clear any history. Stateless processors do nothing.
    fn reset(&mut self) {}
}

impl<P: Processor + ?Sized> Processor for Box<P> {
    fn process(&mut self, value: f64) -> f64 {
        (**self).process(value)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

pub trait ProcessorExt: Processor + Sized {
    fn through<N: Processor>(self, next: N) -> Through<Self, N> {
        Through::new(self, next)
    }
}

impl<T: Processor> ProcessorExt for T {}

/// Two processors in series.
#[derive(Debug, Clone)]
pub struct Through<S, N> {
    first: S,
    second: N,
}

impl<S, N> Through<S, N> {
    pub fn new(first: S, second: N) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &S {
        &self.first
    }

    pub fn first_mut(&mut self) -> &mut S {
        &mut self.first
    }

    pub fn second(&self) -> &N {
        &self.second
    }

    pub fn second_mut(&mut self) -> &mut N {
        &mut self.second
    }

    pub fn into_inner(self) -> (S, N) {
        (self.first, self.second)
    }
}

impl<S: Processor, N: Processor> Processor for Through<S, N> {
    #[inline]
    fn process(&mut self, value: f64) -> f64 {
        let value = self.first.process(value);
        self.second.process(value)
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }
}

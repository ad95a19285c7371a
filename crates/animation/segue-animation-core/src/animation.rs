//! The animation contract.
//!
//! `start` (re)initialises timing state; `update(dt)` advances by `dt` seconds
//! and reports whether the animation wants further updates. Construction never
//! starts an animation by itself: use the `started` factories (or
//! [`AnimationExt::started`]) to get an instance that is running on creation.

/// Time-driven update unit.
pub trait Animation {
    /// Restart from the beginning. Never resumes: all timing state is reset.
    fn start(&mut self);

    /// Advance by `dt` seconds (expected >= 0). Returns `false` on the call that
    /// reaches the terminal condition.
    fn update(&mut self, dt: f32) -> bool;
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    #[inline]
    fn start(&mut self) {
        (**self).start();
    }

    #[inline]
    fn update(&mut self, dt: f32) -> bool {
        (**self).update(dt)
    }
}

/// Builder-style helpers available on every sized animation.
pub trait AnimationExt: Animation + Sized {
    /// Start the animation and hand it back.
    fn started(mut self) -> Self {
        self.start();
        self
    }

    /// Erase the concrete type for storage in composites.
    fn boxed(self) -> Box<dyn Animation>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<A: Animation + Sized> AnimationExt for A {}

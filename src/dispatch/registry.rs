//! Bounded registry of motors driven by the shared timer.

use heapless::Vec;

use crate::motor::{CoilDriver, MotorControl, StepSequencer};

/// Number of motors one shared timer can drive.
pub const MAX_MOTORS: usize = 3;

/// Result of adding a motor to a registry.
///
/// Rejections are not errors: the motor is simply not driven. The rejected
/// value is handed back so the caller keeps ownership of its coils.
#[derive(Debug)]
pub enum Registration<S> {
    /// Added at the end of the dispatch order.
    Registered,
    /// The same control block is already registered; nothing changed.
    Duplicate(S),
    /// No free slot; the motor stays inert.
    Full(S),
}

impl<S> Registration<S> {
    /// Whether the motor was added.
    #[inline]
    pub fn is_registered(&self) -> bool {
        matches!(self, Registration::Registered)
    }

    /// The rejected value, if any.
    pub fn into_rejected(self) -> Option<S> {
        match self {
            Registration::Registered => None,
            Registration::Duplicate(s) | Registration::Full(s) => Some(s),
        }
    }

    /// Map the rejected value.
    pub fn map<T, F: FnOnce(S) -> T>(self, f: F) -> Registration<T> {
        match self {
            Registration::Registered => Registration::Registered,
            Registration::Duplicate(s) => Registration::Duplicate(f(s)),
            Registration::Full(s) => Registration::Full(f(s)),
        }
    }
}

/// Ordered, fixed-capacity set of step sequencers.
///
/// Entries are identified by the address of their [`MotorControl`], which
/// stays put for as long as the registry borrows it. Order is insertion
/// order and decides dispatch order.
pub struct MotorRegistry<'a, C, const N: usize = MAX_MOTORS> {
    entries: Vec<StepSequencer<'a, C>, N>,
}

impl<'a, C, const N: usize> Default for MotorRegistry<'a, C, N>
where
    C: CoilDriver,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C, const N: usize> MotorRegistry<'a, C, N>
where
    C: CoilDriver,
{
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a sequencer unless its control block is already present or
    /// every slot is taken.
    ///
    /// A registered control block is marked attached so it accepts step
    /// requests.
    pub fn add(&mut self, sequencer: StepSequencer<'a, C>) -> Registration<StepSequencer<'a, C>> {
        if self.contains(sequencer.control()) {
            return Registration::Duplicate(sequencer);
        }

        let control = sequencer.control();
        match self.entries.push(sequencer) {
            Ok(()) => {
                control.set_attached(true);
                Registration::Registered
            }
            Err(sequencer) => Registration::Full(sequencer),
        }
    }

    /// Remove the sequencer serving `control`, keeping the others in order.
    ///
    /// The control block is marked detached and its pending steps dropped.
    pub fn remove(&mut self, control: &MotorControl) -> Option<StepSequencer<'a, C>> {
        let index = self.position_of(control)?;
        let sequencer = self.entries.remove(index);
        control.set_attached(false);
        control.stop();
        Some(sequencer)
    }

    /// Whether `control` is registered.
    #[inline]
    pub fn contains(&self, control: &MotorControl) -> bool {
        self.position_of(control).is_some()
    }

    /// Dispatch position of `control`.
    pub fn position_of(&self, control: &MotorControl) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| core::ptr::eq(entry.control(), control))
    }

    /// The sequencer serving `control`.
    pub fn get(&self, control: &MotorControl) -> Option<&StepSequencer<'a, C>> {
        self.position_of(control).map(|index| &self.entries[index])
    }

    /// Number of registered motors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no motor is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every slot is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Maximum number of motors.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Sequencers in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &StepSequencer<'a, C>> {
        self.entries.iter()
    }

    /// Sequencers in dispatch order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut StepSequencer<'a, C>> {
        self.entries.iter_mut()
    }
}

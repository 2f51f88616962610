use std::fmt;

use num_complex::Complex;

use crate::constants::{angular_frequency, CAPACITIVE_PHASE, INDUCTIVE_PHASE};
use crate::errors::{DomainError, Result};
use crate::math::{self, CScalar, Scalar};

/// Closed set of component kinds, used for display and classification.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Ideal resistor.
    Resistor,
    /// Ideal capacitor.
    Capacitor,
    /// Ideal inductor.
    Inductor,
    /// Small-signal junction diode approximation.
    Diode,
    /// Static bipolar transistor approximation.
    Transistor,
}

impl ComponentKind {
    /// Type name shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resistor => "Resistor",
            Self::Capacitor => "Capacitor",
            Self::Inductor => "Inductor",
            Self::Diode => "Diode",
            Self::Transistor => "Transistor",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn finite(kind: ComponentKind, parameter: &'static str, value: Scalar) -> Result<Scalar> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteParameter { kind, parameter, value })
    }
}

fn positive(kind: ComponentKind, parameter: &'static str, value: Scalar) -> Result<Scalar> {
    let value = finite(kind, parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositiveParameter { kind, parameter, value })
    }
}

/// Lumped resistor model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    resistance: Scalar,
}

impl Resistor {
    /// Creates a resistor. Resistance must be finite and positive.
    pub fn new(resistance_ohms: Scalar) -> Result<Self> {
        Ok(Self {
            resistance: positive(ComponentKind::Resistor, "resistance", resistance_ohms)?,
        })
    }

    /// Resistance in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Frequency-independent impedance `R + j0`.
    #[must_use]
    pub fn impedance(&self) -> CScalar {
        Complex::new(self.resistance, 0.0)
    }
}

/// Lumped capacitor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    capacitance: Scalar,
}

impl Capacitor {
    /// Creates a capacitor. Capacitance must be finite and positive.
    pub fn new(capacitance_f: Scalar) -> Result<Self> {
        Ok(Self {
            capacitance: positive(ComponentKind::Capacitor, "capacitance", capacitance_f)?,
        })
    }

    /// Capacitance in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Impedance `-j / (2πfC)`. Unbounded at 0 Hz.
    pub fn impedance(&self, frequency_hz: Scalar) -> Result<CScalar> {
        if frequency_hz == 0.0 {
            return Err(DomainError::ZeroFrequency(ComponentKind::Capacitor));
        }
        let omega = angular_frequency(frequency_hz);
        Ok(Complex::new(0.0, -1.0 / (omega * self.capacitance)))
    }
}

/// Lumped inductor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    inductance: Scalar,
}

impl Inductor {
    /// Creates an inductor. Inductance must be finite and positive.
    pub fn new(inductance_h: Scalar) -> Result<Self> {
        Ok(Self {
            inductance: positive(ComponentKind::Inductor, "inductance", inductance_h)?,
        })
    }

    /// Inductance in henries.
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance
    }

    /// Impedance `j2πfL`. Zero at 0 Hz.
    #[must_use]
    pub fn impedance(&self, frequency_hz: Scalar) -> CScalar {
        Complex::new(0.0, angular_frequency(frequency_hz) * self.inductance)
    }
}

/// Simplified small-signal diode: junction resistance `R` shunted by junction
/// capacitance `C`, plus a reactive term scaled by the saturation current.
///
/// ```text
/// Z(ω) = R / (1 + jωRC) + ω_s / (jωC · (1 + jωRC)),   ω_s = I_s·R / C
/// ```
///
/// This is a closed-form approximation for display purposes, not a physical
/// junction model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diode {
    capacitance: Scalar,
    resistance: Scalar,
    saturation_current: Scalar,
}

impl Diode {
    /// Creates a diode model. Capacitance and resistance must be positive,
    /// saturation current non-negative.
    pub fn new(capacitance_f: Scalar, resistance_ohms: Scalar, saturation_current_a: Scalar) -> Result<Self> {
        let kind = ComponentKind::Diode;
        let saturation_current = finite(kind, "saturation current", saturation_current_a)?;
        if saturation_current < 0.0 {
            return Err(DomainError::NonPositiveParameter {
                kind,
                parameter: "saturation current",
                value: saturation_current,
            });
        }
        Ok(Self {
            capacitance: positive(kind, "capacitance", capacitance_f)?,
            resistance: positive(kind, "resistance", resistance_ohms)?,
            saturation_current,
        })
    }

    /// Junction capacitance in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Junction resistance in ohms.
    #[must_use]
    pub fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Saturation current in amperes.
    #[must_use]
    pub fn saturation_current(&self) -> Scalar {
        self.saturation_current
    }

    /// Corner frequency `1 / RC` in rad/s.
    #[must_use]
    pub fn corner_frequency(&self) -> Scalar {
        1.0 / (self.resistance * self.capacitance)
    }

    /// Impedance at `frequency_hz`. Unbounded at 0 Hz.
    pub fn impedance(&self, frequency_hz: Scalar) -> Result<CScalar> {
        if frequency_hz == 0.0 {
            return Err(DomainError::ZeroFrequency(ComponentKind::Diode));
        }
        let omega = angular_frequency(frequency_hz);
        let omega_s = self.saturation_current * self.resistance / self.capacitance;
        let j_omega_c = Complex::new(0.0, omega * self.capacitance);
        let denom = math::ONE + j_omega_c * self.resistance;
        Ok(self.resistance / denom + omega_s / (j_omega_c * denom))
    }
}

/// Static bipolar transistor operating point. The impedance is the
/// collector-emitter resistance `V_ce / I_c` and does not depend on frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transistor {
    collector_current: Scalar,
    base_current: Scalar,
    emitter_current: Scalar,
    collector_emitter_voltage: Scalar,
    base_emitter_voltage: Scalar,
}

impl Transistor {
    /// Creates a transistor operating point. All values must be finite and the
    /// collector current positive.
    pub fn new(
        collector_current_a: Scalar,
        base_current_a: Scalar,
        emitter_current_a: Scalar,
        collector_emitter_voltage_v: Scalar,
        base_emitter_voltage_v: Scalar,
    ) -> Result<Self> {
        let kind = ComponentKind::Transistor;
        let transistor = Self {
            collector_current: positive(kind, "collector current", collector_current_a)?,
            base_current: finite(kind, "base current", base_current_a)?,
            emitter_current: finite(kind, "emitter current", emitter_current_a)?,
            collector_emitter_voltage: finite(kind, "collector-emitter voltage", collector_emitter_voltage_v)?,
            base_emitter_voltage: finite(kind, "base-emitter voltage", base_emitter_voltage_v)?,
        };
        if math::is_finite(transistor.impedance()) {
            Ok(transistor)
        } else {
            Err(DomainError::NonFiniteImpedance)
        }
    }

    /// Collector current `I_c` in amperes.
    #[must_use]
    pub fn collector_current(&self) -> Scalar {
        self.collector_current
    }

    /// Base current `I_b` in amperes.
    #[must_use]
    pub fn base_current(&self) -> Scalar {
        self.base_current
    }

    /// Emitter current `I_e` in amperes.
    #[must_use]
    pub fn emitter_current(&self) -> Scalar {
        self.emitter_current
    }

    /// Collector-emitter voltage `V_ce` in volts.
    #[must_use]
    pub fn collector_emitter_voltage(&self) -> Scalar {
        self.collector_emitter_voltage
    }

    /// Base-emitter voltage `V_be` in volts.
    #[must_use]
    pub fn base_emitter_voltage(&self) -> Scalar {
        self.base_emitter_voltage
    }

    /// Static impedance `V_ce / I_c`.
    #[must_use]
    pub fn impedance(&self) -> CScalar {
        Complex::new(self.collector_emitter_voltage / self.collector_current, 0.0)
    }
}

/// Physical model of a component, one variant per kind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// Resistor payload.
    Resistor(Resistor),
    /// Capacitor payload.
    Capacitor(Capacitor),
    /// Inductor payload.
    Inductor(Inductor),
    /// Diode payload.
    Diode(Diode),
    /// Transistor payload.
    Transistor(Transistor),
}

impl Element {
    /// Kind of this element.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Resistor(_) => ComponentKind::Resistor,
            Self::Capacitor(_) => ComponentKind::Capacitor,
            Self::Inductor(_) => ComponentKind::Inductor,
            Self::Diode(_) => ComponentKind::Diode,
            Self::Transistor(_) => ComponentKind::Transistor,
        }
    }

    /// True when the impedance changes with frequency.
    #[must_use]
    pub const fn is_frequency_dependent(&self) -> bool {
        !matches!(self, Self::Resistor(_) | Self::Transistor(_))
    }

    /// Evaluates the closed-form impedance at `frequency_hz`.
    pub fn impedance(&self, frequency_hz: Scalar) -> Result<CScalar> {
        let frequency_hz = math::validate_frequency(frequency_hz)?;
        let z = match self {
            Self::Resistor(r) => r.impedance(),
            Self::Capacitor(c) => c.impedance(frequency_hz)?,
            Self::Inductor(l) => l.impedance(frequency_hz),
            Self::Diode(d) => d.impedance(frequency_hz)?,
            Self::Transistor(t) => t.impedance(),
        };
        // Extreme but finite inputs can still overflow.
        if math::is_finite(z) {
            Ok(z)
        } else {
            Err(DomainError::NonFiniteImpedance)
        }
    }
}

macro_rules! element_from {
    ($($variant:ident),*) => {
        $(impl From<$variant> for Element {
            fn from(value: $variant) -> Self {
                Self::$variant(value)
            }
        })*
    };
}

element_from!(Resistor, Capacitor, Inductor, Diode, Transistor);

/// A named component with its last applied frequency and memoized impedance.
///
/// Resistors and transistors have an impedance from construction. The other
/// kinds have none until [`Component::set_frequency`] succeeds, and their
/// accessors return [`DomainError::FrequencyNotSet`] until then.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    element: Element,
    frequency: Scalar,
    impedance: Option<CScalar>,
}

impl Component {
    /// Wraps a physical model under a display name (e.g. `R1`).
    #[must_use]
    pub fn new(name: impl Into<String>, element: impl Into<Element>) -> Self {
        let element = element.into();
        let impedance = if element.is_frequency_dependent() {
            None
        } else {
            element.impedance(0.0).ok()
        };
        Self {
            name: name.into(),
            element,
            frequency: 0.0,
            impedance,
        }
    }

    /// Creates a named resistor.
    pub fn resistor(name: impl Into<String>, resistance_ohms: Scalar) -> Result<Self> {
        Ok(Self::new(name, Resistor::new(resistance_ohms)?))
    }

    /// Creates a named capacitor.
    pub fn capacitor(name: impl Into<String>, capacitance_f: Scalar) -> Result<Self> {
        Ok(Self::new(name, Capacitor::new(capacitance_f)?))
    }

    /// Creates a named inductor.
    pub fn inductor(name: impl Into<String>, inductance_h: Scalar) -> Result<Self> {
        Ok(Self::new(name, Inductor::new(inductance_h)?))
    }

    /// Human-readable identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying physical model.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Kind of the component.
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.element.kind()
    }

    /// Applies `frequency_hz` and recomputes the impedance. Leaves the
    /// component untouched on error. Transistors validate but ignore it.
    pub fn set_frequency(&mut self, frequency_hz: Scalar) -> Result<()> {
        let impedance = self.element.impedance(frequency_hz)?;
        self.commit(frequency_hz, impedance);
        Ok(())
    }

    pub(crate) fn commit(&mut self, frequency_hz: Scalar, impedance: CScalar) {
        if !matches!(self.element, Element::Transistor(_)) {
            self.frequency = frequency_hz;
        }
        self.impedance = Some(impedance);
    }

    /// Last applied frequency in hertz; always 0 for transistors.
    #[must_use]
    pub fn frequency(&self) -> Scalar {
        self.frequency
    }

    pub(crate) fn cached_impedance(&self) -> Option<CScalar> {
        self.impedance
    }

    /// Impedance at the last applied frequency.
    pub fn impedance(&self) -> Result<CScalar> {
        self.impedance
            .ok_or_else(|| DomainError::FrequencyNotSet(self.name.clone()))
    }

    /// Impedance modulus in ohms.
    pub fn impedance_magnitude(&self) -> Result<Scalar> {
        self.impedance().map(math::magnitude)
    }

    /// Phase difference in radians. Resistors and diodes report `arg(Z)`;
    /// capacitors, inductors and transistors report their ideal constants.
    pub fn phase_difference(&self) -> Result<Scalar> {
        match self.element {
            Element::Resistor(_) | Element::Diode(_) => self.impedance().map(math::phase),
            Element::Capacitor(_) => Ok(CAPACITIVE_PHASE),
            Element::Inductor(_) => Ok(INDUCTIVE_PHASE),
            Element::Transistor(_) => Ok(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn resistor_impedance_is_real_at_any_frequency() {
        let mut r = Component::resistor("R1", 100.0).unwrap();
        assert_eq!(r.impedance().unwrap(), Complex::new(100.0, 0.0));
        for f in [0.0, 50.0, 1.0e6] {
            r.set_frequency(f).unwrap();
            let z = r.impedance().unwrap();
            assert_relative_eq!(z.re, 100.0);
            assert_relative_eq!(z.im, 0.0);
            assert_relative_eq!(r.phase_difference().unwrap(), 0.0);
        }
        assert_relative_eq!(r.frequency(), 1.0e6);
    }

    #[test]
    fn capacitor_impedance_is_reactive() {
        let mut c = Component::capacitor("C1", 1e-6).unwrap();
        c.set_frequency(1_000.0).unwrap();
        let z = c.impedance().unwrap();
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(z.im, -159.154_943_091_895_3, max_relative = 1.0e-12);
        assert_relative_eq!(c.impedance_magnitude().unwrap(), 1.0 / (2.0 * PI * 1_000.0 * 1e-6), max_relative = 1.0e-12);
        assert_eq!(c.phase_difference().unwrap(), -PI / 2.0);
    }

    #[test]
    fn capacitor_rejects_zero_frequency_and_keeps_state() {
        let mut c = Component::capacitor("C1", 1e-6).unwrap();
        assert_eq!(c.set_frequency(0.0), Err(DomainError::ZeroFrequency(ComponentKind::Capacitor)));
        assert!(matches!(c.impedance(), Err(DomainError::FrequencyNotSet(_))));
        assert!(c.impedance_magnitude().is_err());

        c.set_frequency(10.0).unwrap();
        let before = c.impedance().unwrap();
        assert!(c.set_frequency(0.0).is_err());
        assert_eq!(c.impedance().unwrap(), before);
        assert_relative_eq!(c.frequency(), 10.0);
    }

    #[test]
    fn inductor_impedance_scales_with_frequency() {
        let mut l = Component::inductor("L1", 0.01).unwrap();
        assert!(l.impedance().is_err());
        l.set_frequency(500.0).unwrap();
        assert_relative_eq!(l.impedance().unwrap().im, 31.415_926_535_897_93, max_relative = 1.0e-12);
        assert_eq!(l.phase_difference().unwrap(), PI / 2.0);
        l.set_frequency(0.0).unwrap();
        assert_eq!(l.impedance().unwrap(), math::ZERO);
    }

    #[test]
    fn frequency_changes_leave_no_residue() {
        let mut swept = Component::inductor("L1", 2.2e-3).unwrap();
        swept.set_frequency(60.0).unwrap();
        swept.set_frequency(4_000.0).unwrap();
        let mut fresh = Component::inductor("L2", 2.2e-3).unwrap();
        fresh.set_frequency(4_000.0).unwrap();
        assert_eq!(swept.impedance().unwrap(), fresh.impedance().unwrap());
    }

    #[test]
    fn diode_combines_resistive_and_reactive_terms() {
        let diode = Diode::new(1e-9, 1_000.0, 1e-12).unwrap();
        let f = 10_000.0;
        let z = diode.impedance(f).unwrap();
        let omega = 2.0 * PI * f;
        let jwc = Complex::new(0.0, omega * 1e-9);
        let denom = Complex::new(1.0, 0.0) + jwc * 1_000.0;
        let omega_s = 1e-12 * 1_000.0 / 1e-9;
        let expected = Complex::new(1_000.0, 0.0) / denom + Complex::new(omega_s, 0.0) / (jwc * denom);
        assert_relative_eq!(z.re, expected.re, max_relative = 1.0e-12);
        assert_relative_eq!(z.im, expected.im, max_relative = 1.0e-12);
        assert!(z.re.is_finite() && z.im.is_finite());
        assert_relative_eq!(diode.corner_frequency(), 1.0e6, max_relative = 1.0e-12);

        let mut c = Component::new("D1", diode);
        c.set_frequency(f).unwrap();
        assert_relative_eq!(c.phase_difference().unwrap(), z.arg());
        assert_eq!(diode.impedance(0.0), Err(DomainError::ZeroFrequency(ComponentKind::Diode)));
    }

    #[test]
    fn transistor_ignores_frequency() {
        let t = Transistor::new(2e-3, 2e-5, 2.02e-3, 5.0, 0.7).unwrap();
        let mut c = Component::new("Q1", t);
        assert_relative_eq!(c.impedance().unwrap().re, 2_500.0, max_relative = 1.0e-12);
        c.set_frequency(1.0e6).unwrap();
        assert_eq!(c.frequency(), 0.0);
        assert_relative_eq!(c.impedance().unwrap().re, 2_500.0, max_relative = 1.0e-12);
        assert_eq!(c.phase_difference().unwrap(), 0.0);
        assert_eq!(c.kind().to_string(), "Transistor");
    }

    #[test]
    fn construction_rejects_degenerate_parameters() {
        assert!(matches!(
            Resistor::new(0.0),
            Err(DomainError::NonPositiveParameter { kind: ComponentKind::Resistor, .. })
        ));
        assert!(Capacitor::new(-1e-6).is_err());
        assert!(matches!(Inductor::new(f64::NAN), Err(DomainError::NonFiniteParameter { .. })));
        assert!(Diode::new(1e-9, 10.0, -1.0).is_err());
        assert!(Diode::new(1e-9, 10.0, 0.0).is_ok());
        assert!(Transistor::new(0.0, 0.0, 0.0, 5.0, 0.7).is_err());
    }

    #[test]
    fn overflowing_impedance_is_rejected() {
        let mut c = Component::capacitor("C1", 1e-12).unwrap();
        c.set_frequency(1.0).unwrap();
        let before = c.impedance().unwrap();
        assert_eq!(c.set_frequency(1e-300), Err(DomainError::NonFiniteImpedance));
        assert_eq!(c.impedance().unwrap(), before);
        assert_eq!(c.frequency(), 1.0);

        let mut l = Component::inductor("L1", 1e10).unwrap();
        assert_eq!(l.set_frequency(1e300), Err(DomainError::NonFiniteImpedance));
        assert_eq!(l.impedance(), Err(DomainError::FrequencyNotSet("L1".into())));

        let d = Diode::new(1e-300, 1e300, 1.0).unwrap();
        assert_eq!(Element::from(d).impedance(1e-300), Err(DomainError::NonFiniteImpedance));
        assert_eq!(
            Transistor::new(1e-300, 0.0, 0.0, 1e300, 0.7),
            Err(DomainError::NonFiniteImpedance)
        );
    }

    #[test]
    fn negative_frequency_is_rejected() {
        let mut r = Component::resistor("R1", 10.0).unwrap();
        assert_eq!(r.set_frequency(-5.0), Err(DomainError::InvalidFrequency(-5.0)));
    }
}

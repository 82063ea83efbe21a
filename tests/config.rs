#![allow(unused_doc_comments)]

use proptest::prelude::*;
use tunneling::{ Integrator, Params, error::{ ConfigError, TError } };

fn config_err(params: Params) -> ConfigError {
    match Integrator::new(params) {
        Err(TError::InvalidConfiguration(err)) => err,
        Err(err) => panic!("unexpected error kind: {}", err),
        Ok(_) => panic!("configuration unexpectedly accepted: {:?}", params),
    }
}

#[test]
fn spatial_step_too_large() {
    // 42 nm domain sampled every 30 nm
    let err = config_err(Params { dx: 30_000.0, ..Params::default() });
    assert!(matches!(err, ConfigError::SpatialGrid(1)));
    let err = config_err(Params { dx: 1e9, ..Params::default() });
    assert!(matches!(err, ConfigError::SpatialGrid(0)));
}

#[test]
fn time_step_too_large() {
    let err = config_err(Params { dt: 31_000.0, ..Params::default() });
    assert!(matches!(err, ConfigError::TemporalGrid(0)));
}

#[test]
fn single_time_point() {
    let sim = Integrator::new(Params { duration: 0.015, ..Params::default() })
        .unwrap();
    assert_eq!(sim.time_steps(), 1);
    assert_eq!(sim.get_t()[0], 0.0);
}

#[test]
fn error_kinds() {
    let err = Integrator::new(Params { packet_size: -1.0, ..Params::default() })
        .unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(!err.is_internal_invariant_violation());
    assert!(err.to_string().contains("packet_size"));
}

#[test]
fn zero_barrier_is_allowed() {
    let params = Params {
        packet_size: 0.1,
        barrier_size: 0.0,
        barrier_height: 0.0,
        duration: 0.05,
        ..Params::default()
    };
    let sim = Integrator::new(params).unwrap();
    assert!(sim.get_V().iter().all(|Vj| *Vj == 0.0));
}

#[test]
fn json_document() {
    let doc = r#"{
        "packet_size": 0.5,
        "barrier_size": 0.5,
        "duration": 12,
        "packet_energy": 1,
        "barrier_height": 1,
        "dx": 10,
        "dt": 2
    }"#;
    let params: Params = serde_json::from_str(doc).unwrap();
    assert_eq!(params, Params::new(0.5, 0.5, 12.0, 1.0, 1.0, 10.0, 2.0));
    let back: Params
        = serde_json::from_str(&serde_json::to_string(&params).unwrap())
        .unwrap();
    assert_eq!(back, params);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32, .. ProptestConfig::default()
    })]

    /// Any strictly positive, finite set of parameters passes validation.
    #[test]
    fn positive_params_validate(
        packet_size in 1e-3f64..1e3,
        barrier_size in 0.0f64..1e3,
        duration in 1e-3f64..1e3,
        packet_energy in 1e-3f64..1e3,
        barrier_height in 0.0f64..1e3,
        dx in 1e-3f64..1e3,
        dt in 1e-3f64..1e3,
    ) {
        let params = Params::new(
            packet_size, barrier_size, duration,
            packet_energy, barrier_height, dx, dt,
        );
        prop_assert!(params.validate().is_ok());
        let si = params.to_si().unwrap();
        prop_assert!(si.dx > 0.0 && si.dt > 0.0);
    }

    /// A non-positive spatial or temporal scale is always rejected, whichever
    /// field it is in.
    #[test]
    fn nonpositive_params_fail(
        field in 0usize..5,
        bad in prop_oneof![
            -1e3f64..=0.0,
            Just(f64::NAN),
            Just(f64::INFINITY),
        ],
    ) {
        let mut params = Params::default();
        match field {
            0 => params.packet_size = bad,
            1 => params.duration = bad,
            2 => params.packet_energy = bad,
            3 => params.dx = bad,
            _ => params.dt = bad,
        }
        let is_nonpositive = matches!(
            params.validate(),
            Err(ConfigError::NonPositive(..))
        );
        prop_assert!(is_nonpositive);
        prop_assert!(Integrator::new(params).unwrap_err().is_invalid_configuration());
    }

    /// Negative barrier dimensions are rejected.
    #[test]
    fn negative_barrier_fails(
        barrier_size in -1e3f64..1e3,
        barrier_height in -1e3f64..1e3,
    ) {
        prop_assume!(barrier_size < 0.0 || barrier_height < 0.0);
        let params = Params { barrier_size, barrier_height, ..Params::default() };
        let is_negative = matches!(
            params.validate(),
            Err(ConfigError::Negative(..))
        );
        prop_assert!(is_negative);
    }

    /// Grid sizes follow from the domain layout, and a step leaves the edges
    /// alone.
    #[test]
    fn grid_sizes(
        packet_size in 0.05f64..0.2,
        dx in 5.0f64..20.0,
        duration in 0.02f64..0.1,
    ) {
        let params = Params { packet_size, dx, duration, ..Params::default() };
        let mut sim = Integrator::new(params).unwrap();
        let x_max = 42.0 * packet_size * 1e-9;
        let nx = (x_max / (dx * 1e-12)) as usize;
        let nt = (duration * 1e-15 / 10e-18) as usize;
        prop_assert!(sim.len().abs_diff(nx) <= 1);
        prop_assert!(sim.time_steps().abs_diff(nt) <= 1);
        prop_assert_eq!(sim.get_x().len(), sim.len());
        prop_assert_eq!(sim.get_V().len(), sim.len());
        prop_assert_eq!(sim.get_K().len(), sim.len());

        let q0 = sim.state();
        sim.step().unwrap();
        let q1 = sim.state();
        let n = sim.len();
        prop_assert_eq!(q1.len(), n);
        prop_assert_eq!(q1[0], q0[0]);
        prop_assert_eq!(q1[n - 1], q0[n - 1]);
    }
}

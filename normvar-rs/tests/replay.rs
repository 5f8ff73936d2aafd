//! Post-conditions checked against recorded draw traces.

use normvar_rs::{boxmuller, inverse, polar, rejection};
use uniform_rs::{RecordingUniform, ReplayUniform, SeededUniform};

#[test]
fn polar_pairs_come_from_inside_disc() {
    let mut src = RecordingUniform::new(SeededUniform::new(123));
    for _ in 0..10_000 {
        src.clear();
        let (x, y) = polar::pair(&mut src);
        let trace = src.trace();
        assert_eq!(trace.len() % 2, 0);

        let (rejected, accepted) = trace.split_at(trace.len() - 2);
        let (u1, u2) = (accepted[0], accepted[1]);
        let s = u1 * u1 + u2 * u2;
        assert!(s <= 1.0 && s > 0.0, "emitted pair from s = {}", s);
        assert_eq!(polar::accept(u1, u2), Some((x, y)));

        for p in rejected.chunks_exact(2) {
            let s = p[0] * p[0] + p[1] * p[1];
            assert!(s > 1.0 || s == 0.0, "rejected a point with s = {}", s);
        }
    }
}

#[test]
fn accept_reject_satisfies_envelope() {
    let mut src = RecordingUniform::new(SeededUniform::new(123));
    for _ in 0..10_000 {
        src.clear();
        let x = rejection::sample(&mut src);
        let trace = src.trace();
        assert_eq!(trace.len() % 3, 0);

        let last = &trace[trace.len() - 3..];
        let (u1, u2, u3) = (last[0], last[1], last[2]);
        let d = x.abs() - 1.0;
        assert!(u2 <= (-0.5 * d * d).exp());
        assert_eq!(x.abs(), -u1.ln());
        assert_eq!(x < 0.0, u3 <= 0.5);

        for p in trace[..trace.len() - 3].chunks_exact(3) {
            assert!(rejection::accept(p[0], p[1], p[2]).is_none());
        }
    }
}

#[test]
fn recorded_trace_replays_identically() {
    let mut rec = RecordingUniform::new(SeededUniform::new(99));
    let original: Vec<f64> = (0..500)
        .flat_map(|_| {
            let (a, b) = boxmuller::pair(&mut rec);
            let (c, d) = polar::pair(&mut rec);
            [a, b, c, d, inverse::sample(&mut rec), rejection::sample(&mut rec)]
        })
        .collect();
    let (_, trace) = rec.into_parts();

    let mut replay = ReplayUniform::new(trace);
    let replayed: Vec<f64> = (0..500)
        .flat_map(|_| {
            let (a, b) = boxmuller::pair(&mut replay);
            let (c, d) = polar::pair(&mut replay);
            [a, b, c, d, inverse::sample(&mut replay), rejection::sample(&mut replay)]
        })
        .collect();

    assert_eq!(original, replayed);
    assert_eq!(replay.remaining(), 0);
}

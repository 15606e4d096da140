#![no_main]

//! Fuzz target for frame number to timecode conversion.

use arbitrary::Arbitrary;
use editorial_timecode::{frame_from_timecode_str, timecode_from_frame, FrameRate, Timecode};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FrameInput {
    frame: u64,
    delta: i64,
    drop_frame: bool,
    rate_index: u8,
}

const RATES: [FrameRate; 6] = [
    FrameRate::FPS_23_976,
    FrameRate::FPS_24,
    FrameRate::FPS_29_97,
    FrameRate::FPS_47_952,
    FrameRate::FPS_59_94,
    FrameRate::FPS_60,
];

fuzz_target!(|input: FrameInput| {
    let fps = RATES[input.rate_index as usize % RATES.len()];
    // Keep hours inside three digits.
    let frame = input.frame % (fps.nominal() as u64 * 3600 * 999);
    let drop_frame = input.drop_frame && fps.is_drop_frame_eligible();

    let label = timecode_from_frame(frame, fps, drop_frame).expect("frame formats");
    let back = frame_from_timecode_str(&label, fps, None).expect("label parses");
    assert_eq!(back, frame, "{label}");

    // Arithmetic either succeeds or reports underflow/overflow; it never panics.
    if let Ok(tc) = Timecode::from_frame(frame, fps, drop_frame) {
        let _ = tc.add(input.delta);
        let _ = tc.subtract(input.delta);
    }
});

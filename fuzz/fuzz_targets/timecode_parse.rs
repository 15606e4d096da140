#![no_main]

//! Fuzz target for timecode string parsing.
//!
//! Any string must either be rejected with an error or convert to a frame
//! number that formats back to the same frame.

use arbitrary::Arbitrary;
use editorial_timecode::{timecode_from_frame, FrameRate, Timecode};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ParseInput {
    timecode: String,
    rate: RateChoice,
    drop_frame: Option<bool>,
}

#[derive(Arbitrary, Debug)]
enum RateChoice {
    Fps23_976,
    Fps24,
    Fps25,
    Fps29_97,
    Fps59_94,
    Custom(u32, u32),
}

impl RateChoice {
    fn frame_rate(&self) -> Option<FrameRate> {
        match *self {
            Self::Fps23_976 => Some(FrameRate::FPS_23_976),
            Self::Fps24 => Some(FrameRate::FPS_24),
            Self::Fps25 => Some(FrameRate::FPS_25),
            Self::Fps29_97 => Some(FrameRate::FPS_29_97),
            Self::Fps59_94 => Some(FrameRate::FPS_59_94),
            Self::Custom(num, den) => FrameRate::new(num, den).ok(),
        }
    }
}

fuzz_target!(|input: ParseInput| {
    if input.timecode.len() > 64 {
        return;
    }
    let Some(fps) = input.rate.frame_rate() else {
        return;
    };

    if let Ok(tc) = Timecode::from_timecode_str(&input.timecode, fps, input.drop_frame) {
        let frame = tc.to_frame();
        let label = timecode_from_frame(frame, fps, tc.drop_frame())
            .expect("a parsed timecode formats");
        let back = Timecode::from_timecode_str(&label, fps, None).expect("formatted label parses");
        assert_eq!(back.to_frame(), frame);
    }

    // Rate strings go through the same parser as the CLI.
    let _ = input.timecode.parse::<FrameRate>();
});

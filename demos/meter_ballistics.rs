/// Steps the peak meter through a burst and prints its ballistics
/// One console plot per attack/release setting, one row per 50ms
use warble_dsp::dsp::level::{db_to_linear, linear_to_db};
use warble_dsp::meters::{Ppm, PpmParam};
use warble_dsp::Error;

const SAMPLE_RATE: f32 = 48_000.0;
const BLOCK_LEN: usize = 480; // 10ms
const PLOT_WIDTH: usize = 24;
const PLOT_FLOOR_DB: f32 = -60.0;

fn main() -> Result<(), Error> {
    println!("=== PPM Ballistics ===\n");
    println!("Programme: 0.25s silence, 0.5s burst at -6 dB, 1.25s silence\n");

    let total_blocks = 200usize;
    let burst = vec![db_to_linear(-6.0); BLOCK_LEN];
    let silence = vec![0.0f32; BLOCK_LEN];

    let settings = [
        ("fast", 0.005, 0.2),
        ("default", Ppm::DEFAULT_ATTACK_SEC, Ppm::DEFAULT_RELEASE_SEC),
        ("slow", 0.02, 2.0),
    ];

    for (name, attack_sec, release_sec) in settings {
        let mut ppm = Ppm::new();
        ppm.init(SAMPLE_RATE, 1)?;
        ppm.set_param(PpmParam::AttackTime, attack_sec)?;
        ppm.set_param(PpmParam::ReleaseTime, release_sec)?;

        println!(
            "--- {name}: attack {:.0}ms, release {:.2}s ---",
            attack_sec * 1000.0,
            release_sec
        );

        let mut peaks = [0.0f32; 1];
        for block in 0..total_blocks {
            let input: &[f32] = if (25..75).contains(&block) {
                &burst
            } else {
                &silence
            };
            ppm.process(&[input], BLOCK_LEN, &mut peaks)?;

            if block % 5 != 0 {
                continue;
            }
            let t = block as f32 * BLOCK_LEN as f32 / SAMPLE_RATE;
            let db = linear_to_db(peaks[0]);
            let filled = (((db - PLOT_FLOOR_DB) / -PLOT_FLOOR_DB).clamp(0.0, 1.0)
                * PLOT_WIDTH as f32) as usize;
            println!(
                "  t={t:5.2}s  {db:>7.1} dB  |{}{}|",
                "#".repeat(filled),
                ".".repeat(PLOT_WIDTH - filled)
            );
        }
        println!();
    }

    println!("• Attack shapes rising input only, release falling input only");
    println!("• At release 0s the meter drops straight to the block peak");
    Ok(())
}

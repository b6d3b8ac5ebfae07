//! Write a deterministic synthetic `.trc` file for manual testing.
//!
//! The fixture is a little-endian two-segment sequence capture with byte
//! samples and a short user-text block.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

const DESCRIPTOR_LEN: usize = 346;
const USER_TEXT: &[u8] = b"synthetic demo trace";

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fixture.trc"));
    let bytes = build_fixture();
    fs::write(&path, bytes)
        .map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    eprintln!("OK: fixture written -> {}", path.display());
    Ok(())
}

fn build_fixture() -> Vec<u8> {
    let mut desc = vec![0u8; DESCRIPTOR_LEN];
    set_bytes(&mut desc, 0, b"WAVEDESC");
    set_bytes(&mut desc, 16, b"LECROY_2_3");
    set_i16(&mut desc, 32, 0); // comm_type: byte samples
    set_i16(&mut desc, 34, 1); // comm_order: little-endian
    set_i32(&mut desc, 36, DESCRIPTOR_LEN as i32);
    set_i32(&mut desc, 40, USER_TEXT.len() as i32);
    set_i32(&mut desc, 48, 32); // trig_time_array: two pairs of doubles
    set_bytes(&mut desc, 76, b"LECROYWR620ZI");
    set_bytes(&mut desc, 96, b"C1");
    set_i32(&mut desc, 116, 8); // wave_array_count
    set_i32(&mut desc, 144, 2); // subarray_count
    set_f32(&mut desc, 156, 0.01); // vertical_gain
    set_f32(&mut desc, 160, -0.05); // vertical_offset
    set_f32(&mut desc, 176, 1e-9); // horiz_interval
    set_f64(&mut desc, 180, -5e-6); // horiz_offset
    set_bytes(&mut desc, 196, b"V");
    set_bytes(&mut desc, 244, b"S");
    // trigger_time: 2012-05-16 13:45:22.5
    set_f64(&mut desc, 296, 22.5);
    desc[304] = 45;
    desc[305] = 13;
    desc[306] = 16;
    desc[307] = 5;
    set_i16(&mut desc, 308, 2012);
    set_i16(&mut desc, 316, 0); // record_type: single sweep
    set_i16(&mut desc, 318, 0); // processing_done: no processing
    set_i16(&mut desc, 324, 9); // time_base: 1 ns/div
    set_i16(&mut desc, 326, 0); // vert_coupling: DC 50 Ohm
    set_i16(&mut desc, 332, 12); // fixed_vert_gain: 10 mV/div

    let mut out = desc;
    out.extend_from_slice(USER_TEXT);
    for value in [0.0f64, 1e-3, 2.5e-3, 1.1e-3] {
        out.extend_from_slice(&value.to_le_bytes());
    }
    out.extend_from_slice(&[10u8, 20, 30, 40, 50, 60, 70, 80]);
    out
}

fn set_bytes(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn set_i16(buf: &mut [u8], offset: usize, value: i16) {
    set_bytes(buf, offset, &value.to_le_bytes());
}

fn set_i32(buf: &mut [u8], offset: usize, value: i32) {
    set_bytes(buf, offset, &value.to_le_bytes());
}

fn set_f32(buf: &mut [u8], offset: usize, value: f32) {
    set_bytes(buf, offset, &value.to_le_bytes());
}

fn set_f64(buf: &mut [u8], offset: usize, value: f64) {
    set_bytes(buf, offset, &value.to_le_bytes());
}

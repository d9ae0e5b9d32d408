//! Blue Midnight Wish, 512-bit output
//!
//! No registry crate implements BMW, so the compression function is
//! written out against the round-2 reference.

use std::num::Wrapping;

const BLOCK_LEN: usize = 128;

/// Last offset at which padding still fits the length field
const MAX_TAIL: usize = 119;

pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut h: [u64; 16] = std::array::from_fn(|i| {
        0x8081_8283_8485_8687u64.wrapping_add((i as u64).wrapping_mul(0x0808_0808_0808_0808))
    });

    let mut chunks = data.chunks_exact(BLOCK_LEN);
    for block in &mut chunks {
        h = compress(&h, &load(block));
    }

    let tail = chunks.remainder();
    let bit_len = (data.len() as u64).wrapping_mul(8);
    let mut buf = [0u8; 2 * BLOCK_LEN];
    buf[..tail.len()].copy_from_slice(tail);
    buf[tail.len()] = 0x80;
    let padded = if tail.len() <= MAX_TAIL { BLOCK_LEN } else { 2 * BLOCK_LEN };
    buf[padded - 8..padded].copy_from_slice(&bit_len.to_le_bytes());
    for block in buf[..padded].chunks_exact(BLOCK_LEN) {
        h = compress(&h, &load(block));
    }

    let finalization: [u64; 16] = std::array::from_fn(|i| 0xaaaa_aaaa_aaaa_aaa0 + i as u64);
    let h = compress(&finalization, &h);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h[8..].iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

fn load(block: &[u8]) -> [u64; 16] {
    std::array::from_fn(|i| read_u64_le(&block[i * 8..]))
}

fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

const F0_MIX: [fn(u64) -> u64; 5] = [s0, s1, s2, s3, s4];
const EXPAND1_MIX: [fn(u64) -> u64; 4] = [s1, s2, s3, s0];
const EXPAND2_ROTATIONS: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let k = j - 16;
    let rot = |i: usize| m[i % 16].rotate_left((i % 16 + 1) as u32);
    rot(k)
        .wrapping_add(rot(k + 3))
        .wrapping_sub(rot(k + 10))
        .wrapping_add((j as u64).wrapping_mul(0x0555_5555_5555_5555))
        ^ h[(k + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let x: [Wrapping<u64>; 16] = std::array::from_fn(|i| Wrapping(m[i] ^ h[i]));
    let w = [
        x[5] - x[7] + x[10] + x[13] + x[14],
        x[6] - x[8] + x[11] + x[14] - x[15],
        x[0] + x[7] + x[9] - x[12] + x[15],
        x[0] - x[1] + x[8] - x[10] + x[13],
        x[1] + x[2] + x[9] - x[11] - x[14],
        x[3] - x[2] + x[10] - x[12] + x[15],
        x[4] - x[0] - x[3] - x[11] + x[13],
        x[1] - x[4] - x[5] - x[12] - x[14],
        x[2] - x[5] - x[6] + x[13] - x[15],
        x[0] - x[3] + x[6] - x[7] + x[14],
        x[8] - x[1] - x[4] - x[7] + x[15],
        x[8] - x[0] - x[2] - x[5] + x[9],
        x[1] + x[3] - x[6] - x[9] + x[10],
        x[2] + x[4] + x[7] + x[10] + x[11],
        x[3] - x[5] + x[8] - x[11] - x[12],
        x[12] - x[4] - x[6] - x[9] + x[13],
    ];

    let mut q = [0u64; 32];
    for i in 0..16 {
        q[i] = F0_MIX[i % 5](w[i].0).wrapping_add(h[(i + 1) % 16]);
    }
    for j in 16..18 {
        let mut acc = 0u64;
        for k in 0..16 {
            acc = acc.wrapping_add(EXPAND1_MIX[k % 4](q[j - 16 + k]));
        }
        q[j] = acc.wrapping_add(add_element(m, h, j));
    }
    for j in 18..32 {
        let mut acc = 0u64;
        for k in 0..14 {
            let v = q[j - 16 + k];
            let term = if k % 2 == 0 { v } else { v.rotate_left(EXPAND2_ROTATIONS[k / 2]) };
            acc = acc.wrapping_add(term);
        }
        acc = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        q[j] = acc.wrapping_add(add_element(m, h, j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, v| acc ^ v);
    let xh = q[24..32].iter().fold(xl, |acc, v| acc ^ v);

    let mut d = [0u64; 16];
    d[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    d[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    d[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    d[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    d[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    d[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    d[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    d[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

    let tail_mix = [
        (xl << 8) ^ q[23],
        (xl >> 6) ^ q[16],
        (xl << 6) ^ q[17],
        (xl << 4) ^ q[18],
        (xl >> 3) ^ q[19],
        (xl >> 4) ^ q[20],
        (xl >> 7) ^ q[21],
        (xl >> 2) ^ q[22],
    ];
    for i in 8..16 {
        d[i] = d[(i - 4) % 8]
            .rotate_left(i as u32 + 1)
            .wrapping_add(xh ^ q[16 + i] ^ m[i])
            .wrapping_add(tail_mix[i - 8] ^ q[i]);
    }
    d
}

fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}


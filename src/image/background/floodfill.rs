use std::collections::VecDeque;

use image::RgbaImage;

use crate::image::background::mask::WhiteMask;

/// Knock out the corner-connected white region using scanline flood fill.
///
/// Compared to pixel-by-pixel BFS, scanline fill reduces queue operations
/// for large contiguous regions and improves cache locality. The reachable
/// set is identical: every pixel connected to a white corner through white
/// pixels (4-connectivity) has its alpha forced to zero.
///
/// Seeds are the four corners only. White pixels elsewhere on the border
/// stay opaque unless a corner path reaches them.
pub(super) fn apply_corner_connected_mask(output: &mut RgbaImage, mask: &WhiteMask) {
    let width = mask.width;
    let height = mask.height;
    if width == 0 || height == 0 {
        return;
    }

    debug_assert_eq!(output.width(), width);
    debug_assert_eq!(output.height(), height);

    let len = width as usize * height as usize;
    let mut state = vec![0_u8; len]; // 0=unseen, 1=enqueued, 2=done
    let mut queue = VecDeque::with_capacity(8);

    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ];
    for (x, y) in corners {
        let idx = pixel_index(width, x, y);
        if state[idx] == 0 && mask.white[idx] {
            state[idx] = 1;
            queue.push_back((x, y));
        }
    }

    while let Some((sx, y)) = queue.pop_front() {
        let sidx = pixel_index(width, sx, y);
        if state[sidx] == 2 || !mask.white[sidx] {
            continue;
        }

        let mut left = sx;
        while left > 0 {
            let nidx = pixel_index(width, left - 1, y);
            if state[nidx] == 2 || !mask.white[nidx] {
                break;
            }
            left -= 1;
        }

        let mut right = sx;
        while right + 1 < width {
            let nidx = pixel_index(width, right + 1, y);
            if state[nidx] == 2 || !mask.white[nidx] {
                break;
            }
            right += 1;
        }

        let mut x = left;
        loop {
            let idx = pixel_index(width, x, y);
            output.get_pixel_mut(x, y)[3] = 0;
            state[idx] = 2;

            if x == right {
                break;
            }
            x += 1;
        }

        if y > 0 {
            enqueue_neighbor_runs(&mut queue, &mut state, mask, width, left, right, y - 1);
        }
        if y + 1 < height {
            enqueue_neighbor_runs(&mut queue, &mut state, mask, width, left, right, y + 1);
        }
    }
}

#[inline]
fn enqueue_neighbor_runs(
    queue: &mut VecDeque<(u32, u32)>,
    state: &mut [u8],
    mask: &WhiteMask,
    width: u32,
    left: u32,
    right: u32,
    y: u32,
) {
    let mut x = left;
    while x <= right {
        let idx = pixel_index(width, x, y);
        if state[idx] == 0 && mask.white[idx] {
            queue.push_back((x, y));
            state[idx] = 1;

            x += 1;
            while x <= right {
                let run_idx = pixel_index(width, x, y);
                if state[run_idx] != 0 || !mask.white[run_idx] {
                    break;
                }
                state[run_idx] = 1;
                x += 1;
            }
        } else {
            x += 1;
        }
    }
}

#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

use rayon::prelude::*;

use flagwave_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// The closure receives the `C1` channels of a source pixel and the `C2`
/// channels of the destination pixel at the same location.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each channel value in the image in parallel.
pub fn par_iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let cols = src.cols();
    if cols == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel of two sources and a per-pixel weight in parallel.
///
/// `src1`, `src2` and `dst` share the channel count `C`; `weight` is single channel.
pub fn par_iter_rows_weighted<T, W, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    weight: &Image<W, 1>,
    dst: &mut Image<T, C>,
    f: impl Fn(&[T], &[T], &W, &mut [T]) + Send + Sync,
) where
    T: Clone + Send + Sync,
    W: Clone + Send + Sync,
{
    let cols = src1.cols();
    if cols == 0 {
        return;
    }

    src1.as_slice()
        .par_chunks_exact(C * cols)
        .zip(src2.as_slice().par_chunks_exact(C * cols))
        .zip(weight.as_slice().par_chunks_exact(cols))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C * cols))
        .for_each(|(((src1_chunk, src2_chunk), weight_chunk), dst_chunk)| {
            src1_chunk
                .chunks_exact(C)
                .zip(src2_chunk.chunks_exact(C))
                .zip(weight_chunk.iter())
                .zip(dst_chunk.chunks_exact_mut(C))
                .for_each(|(((p1, p2), w), out)| {
                    f(p1, p2, w, out);
                });
        });
}

/// Apply a function to each pixel for grid sampling in parallel.
///
/// The closure receives the source coordinates `(x, y)` read from the maps
/// and the destination pixel to fill.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_x: &Image<f32, 1>,
    map_y: &Image<f32, 1>,
    f: impl Fn(&f32, &f32, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 {
        return;
    }

    let map_x_slice = map_x.as_slice();
    let map_y_slice = map_y.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x_slice.par_chunks_exact(cols))
        .zip(map_y_slice.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}

use lanewise::{Mask, Memcpy, Vector, reinterpret_with};

fn main() {
    let v = Vector::<f32, 8>::splat(1.0);
    let _m: Mask<f32, 8> = reinterpret_with::<Memcpy, _, _>(v);
}

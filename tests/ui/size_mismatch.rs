use lanewise::{Vector, reinterpret};

fn main() {
    let v = Vector::<u32, 4>::splat(1);
    let _w: Vector<u8, 32> = reinterpret(v);
}

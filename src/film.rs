/// Flat 2D pixel buffer in row-major order.
#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Film<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value;
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

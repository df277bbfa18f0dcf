pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn div(a: i64, b: i64) -> Option<i64> {
    a.checked_div(b)
}

pub struct Matrix<T> {
    cells: Vec<T>,
    columns: usize,
}

impl<T: Copy> Matrix<T> {
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        self.cells.get(row * self.columns + column).copied()
    }
}

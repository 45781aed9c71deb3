//! Myers' diff over text lines, used to feed the classifier with realistic
//! record streams built from whole manifests.

use manifest_sift::domain::diff_record::DiffRecord;

/// Line-by-line diff of two manifests as an ordered record stream.
pub fn diff_manifests(left: &str, right: &str) -> Vec<DiffRecord> {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();

    MyersDiff::new(&left, &right).diff()
}

struct MyersDiff<'d> {
    left: &'d [&'d str],
    right: &'d [&'d str],
}

impl<'d> MyersDiff<'d> {
    fn new(left: &'d [&'d str], right: &'d [&'d str]) -> Self {
        Self { left, right }
    }

    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.left.len() as isize, self.right.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                // at the diagonal edges only one predecessor exists; in
                // between, prefer the one that got further along the left side
                let mut x = if k == -d {
                    v[idx + 1]
                } else if k == d {
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                // follow the run of common lines
                while x < n && y < m && self.left[x as usize] == self.right[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.left.len() as isize, self.right.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Vec<DiffRecord> {
        if self.left.is_empty() && self.right.is_empty() {
            return Vec::new();
        }

        let mut records = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // only y increased: present only on the right
                if prev_y < self.right.len() as isize {
                    records.push(DiffRecord::right_only(self.right[prev_y as usize]));
                }
            } else if y == prev_y {
                // only x increased: present only on the left
                if prev_x < self.left.len() as isize {
                    records.push(DiffRecord::left_only(self.left[prev_x as usize]));
                }
            } else {
                // diagonal move: common line
                if prev_x < self.left.len() as isize {
                    records.push(DiffRecord::common(self.left[prev_x as usize]));
                }
            }
        }

        records.reverse();
        records
    }
}

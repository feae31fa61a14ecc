pub fn insertion_sort(arr: &mut [i64]) {
    for j in 1..arr.len() {
        let key = arr[j];
        let mut i = j;
        while i > 0 && arr[i - 1] > key {
            arr[i] = arr[i - 1];
            i -= 1;
        }
        arr[i] = key;
    }
}

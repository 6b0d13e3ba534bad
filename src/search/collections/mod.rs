pub mod matrix_data;

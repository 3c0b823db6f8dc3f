pub mod ppm_presenter;

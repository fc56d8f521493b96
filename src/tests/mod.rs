mod test_utils;
mod presets_test;

#![allow(dead_code)]

pub mod raw_files;

pub(crate) mod misc_tool;

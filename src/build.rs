// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/bubbles.ico");    // PNG-wrapped .ico
        res.compile().unwrap();
    }
}

#[derive(Clone)]
pub enum Msg {
    SetPrzedmiot(String),
    SetZakres(String),
    SetDzial(String),
    SetRodzajArkusza(String),
    SetRokArkusza(String),
    SetNumerZadania(String),
    /// Raw value of the `typ_zadania` select.
    SetTypZadania(String),
    SetTresc(String),
    /// Answer index (0..4) and its new value.
    SetOdpowiedz(usize, String),
    SetPoprawnaOdp(String),
    /// A paste anywhere inside the form; may carry an image.
    Pasted(web_sys::Event),
    /// Manual selection through the file input.
    FileSelected(web_sys::File),
    OpenPreviewOverlay,
    ClosePreviewOverlay,
    Zapisz,
}

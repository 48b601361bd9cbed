//! Canonical seed content for the fate deck.
//!
//! Nine read-only prompt lists, one per (category, kind) pair. Pools are
//! replenished from these lists whenever they run empty; the lists
//! themselves are never mutated. Any list of non-empty, pairwise-distinct
//! prompts works here; this is the stock Indonesian content the deck ships
//! with.

use crate::card::{Category, Kind};

/// Light truth prompts: casual questions safe for any group.
pub const LIGHT_TRUTHS: &[&str] = &[
    "Siapa selebriti crush pertamamu?",
    "Makanan aneh yang kamu suka?",
    "Kapan terakhir ngompol?",
    "Kartun masa kecil favorit?",
    "Uang 1M buat beli apa?",
    "Siapa yang paling typo?",
    "Barang termurah yang kamu pakai?",
    "Hal konyol yang kamu cari di Google?",
    "Ingin jadi hewan apa?",
    "Pernah pura-pura sakit?",
    "Lagu yang bikin malu?",
    "Karakter fiksi idaman?",
    "Nama panggilan paling aneh?",
    "Bakat terpendam gak berguna?",
    "Hal paling memalukan di umum?",
    "Guru paling dibenci?",
    "Naksir pacar teman?",
    "Kebohongan terakhir?",
    "Orang terakhir yang di-stalk?",
    "Password wifi rumah?",
    "Kentut di lift lalu tuduh orang?",
    "Mimpi teraneh?",
    "Pernah nyuri sesuatu?",
    "Siapa yang mau jadi asistenmu?",
    "Chat terakhir yang dihapus?",
    "Baju terbalik tanpa sadar?",
    "Ketakutan irasional?",
    "Kapan terakhir mandi?",
];

/// Light dare prompts: harmless stunts and group pranks.
pub const LIGHT_DARES: &[&str] = &[
    "Kirim stiker teraneh.",
    "Ganti nama admin jadi 'Paduka Raja'.",
    "VN lagu nasional pakai 'O'.",
    "Foto lantai sekarang.",
    "Selfie ekspresi jelek.",
    "Ketik pakai hidung: 'Aku Oracle'.",
    "Screenshot wallpaper HP.",
    "Foto profil monyet 10 menit.",
    "Prank chat teman 'Aku hamil'.",
    "Spam stiker 5x.",
    "VN suara kambing.",
    "Foto isi kulkas.",
    "Status WA 'Butuh Perhatian'.",
    "Foto jari kaki.",
    "Chat ortu 'I love you'.",
    "Selfie zoom hidung.",
    "VN ketawa mak lampir.",
    "Sebut 3 hewan bahasa Inggris cepat.",
    "Tahan nafas 20 detik.",
    "Selfie filter alay.",
    "VN 'Aku cantik' 3x.",
    "Bio WA 'Open BO' 2 menit.",
    "Chat teman 'Pinjam Seratus'.",
    "Foto barang di sebelah kiri.",
    "VN nyanyi lagu nasional.",
    "Kirim emoji favorit 10x.",
    "Tulis nama pakai tangan kiri.",
    "Foto langit-langit kamar.",
];

/// Light wildcard prompts: group-wide and meta actions.
pub const LIGHT_WILDCARDS: &[&str] = &[
    "Tunjuk siapa saja buat jawab Truth.",
    "Pilih member buat VN nyanyi.",
    "Truth buat kamu atau Dare buat bawahmu.",
    "Semua kirim emoji buat kamu.",
    "Makan cabai atau push up 20x.",
    "Tukar foto profil 1 jam.",
    "Duel stiker, yang aneh menang.",
    "Batu gunting kertas sama admin.",
    "Pilih 2 orang duel stiker.",
    "Satu pertanyaan buat semua.",
    "Pilih Raja 10 menit.",
    "Semua wajib VN Selamat Pagi.",
    "Tunjuk orang buat selfie.",
    "Semua ganti bio WA.",
    "Kamu bebas giliran!",
    "Pilih teman buat dare bareng.",
    "Reverse! Balikin pertanyaan.",
    "Skip giliran lempar ke bawah.",
    "Semua puji foto profilmu.",
    "Pilih member baca puisi VN.",
    "Tunjuk orang cerita lelucon.",
    "Wajib Truth DAN Dare.",
    "Semua rate lagu pilihanmu.",
    "Semua kirim foto batre HP.",
    "Tunjuk yang paling sering online.",
    "Pilih pasangan game 3 putaran.",
    "Semua kirim 1 kata jadi kalimat.",
    "Tunjuk orang SS chat terakhir.",
];

/// Deep truth prompts: personal and emotionally heavy questions.
pub const DEEP_TRUTHS: &[&str] = &[
    "Kapan terakhir menangis?",
    "Penyesalan terbesar tahun ini?",
    "Siapa yang paling dirindukan?",
    "Insecure bagian fisik mana?",
    "Pernah cinta tak berbalas?",
    "Ketakutan masa depan?",
    "Momen yang ingin diubah?",
    "Pernah merasa tak dianggap?",
    "Kebohongan ke ortu?",
    "Siapa yang paling mirip kamu?",
    "Mimpi buruk jadi nyata?",
    "Pernah doain teman putus?",
    "Hal sulit dimaafkan?",
    "Kapan merasa paling sepi?",
    "Pesan terakhir buat grup?",
    "Sifat toxic yang kamu punya?",
    "Sengaja nyakitin orang?",
    "Kenangan indah yang sakit?",
    "Orang yang berjasa tapi dicuekin?",
    "Bahagia dengan hidup sekarang?",
    "Trauma masa kecil?",
    "Ingin minta maaf ke siapa?",
    "Arti cinta buat kamu?",
    "Pernah mau kabur dari rumah?",
    "Kenapa hilang percaya orang?",
    "Siapa yang sering bikin kecewa?",
    "Pencapaian paling bangga?",
    "Hal yang tertahan di hati?",
];

/// Deep dare prompts: confessions and sincere gestures.
pub const DEEP_DARES: &[&str] = &[
    "Chat mantan 'Aku kangen'.",
    "Ceritakan rahasia terdalam.",
    "VN terima kasih ke ortu.",
    "Tulis surat buat masa lalu.",
    "Foto masa kecil memalukan.",
    "Chat sahabat 'Makasih ya'.",
    "Hapus 1 kontak toxic.",
    "Post status galau hide ortu.",
    "VN nangis buatan.",
    "Cerita detail patah hati.",
    "Kirim foto orang dibenci.",
    "Sebut 3 sifat jelekmu.",
    "Chat ortu 'Maafin aku'.",
    "Lagu yang ngingetin mantan.",
    "Cerita hari terburuk.",
    "SS chat terakhir sama crush.",
    "Puisi sedih via VN.",
    "Ubah 1 hal dari fisikmu.",
    "Block 1 orang random.",
    "Unfollow akun toxic.",
    "Momen ngerasa gak berharga.",
    "Sebut nama orang yang dighosting.",
    "Akui kesalahan di grup.",
    "Foto selfie sedih.",
    "Sebut 5 hal disyukuri.",
    "Peluk guling kirim foto.",
    "Cerita cinta pertama.",
    "Janji yang diingkari.",
];

/// Deep wildcard prompts: reflective group rounds.
pub const DEEP_WILDCARDS: &[&str] = &[
    "Semua jawab: Apa arti bahagia?",
    "Cerita aib atau puji musuh.",
    "Jawab member termuda atau selfie.",
    "Ungkap rahasia atau jujur rasa.",
    "Puji 1 orang di grup.",
    "Semua cerita ketakutan.",
    "Pilih member cerita spiritual.",
    "Tunjuk orang jujur soal crush.",
    "Semua kirim kenangan indah.",
    "Pilih member motivasi VN.",
    "Semua sebut goal tahun ini.",
    "Dunia kiamat mau ngapain?",
    "Lagu yang ubah hidup.",
    "Deskripsikan member 1 kata.",
    "Semua akuin 1 bohong.",
    "Tunjuk orang cerita mimpi.",
    "Semua setor foto langit.",
    "Member curhat 1 menit VN.",
    "Satu hal yang bikin bersyukur.",
    "Momen paling awkward.",
    "Cinta atau karir? Jelasin.",
    "Member cerita hewan kesayangan.",
    "Definisi sukses?",
    "Member cerita film favorit.",
    "Siapa role model hidupmu?",
    "Pengalaman hampir mati.",
    "Nasihat terbaik?",
    "Kebiasaan buruk?",
];

/// Chaos truth prompts: adult questions, age-gated.
pub const CHAOS_TRUTHS: &[&str] = &[
    "Bagian tubuh pasangan favorit?",
    "Fantasi terliar?",
    "Kapan terakhir turn on?",
    "Posisi favorit?",
    "Hal nakal di tempat umum?",
    "Ukuran atau teknik?",
    "Fetish teraneh?",
    "Suara yang disukai saat intim?",
    "Tempat berisiko yang dicoba?",
    "Warna pakaian dalam?",
    "Pernah kirim nudes?",
    "Foreplay atau langsung?",
    "Ilfeel saat ciuman karena?",
    "Imajinasi orang lain?",
    "Lampu nyala atau mati?",
    "Bagian tubuh paling sensitif?",
    "Pernah ketahuan solo?",
    "Tontonan dewasa favorit?",
    "Rekor terlama?",
    "Kasar atau lembut?",
    "Pernah pakai toys?",
    "Dirty talk favorit?",
    "Atas atau bawah?",
    "Main di luar ruangan?",
    "Pengalaman first time?",
    "Berbulu atau mulus?",
    "Pernah rekam aktivitas?",
    "Hal gila demi kepuasan?",
];

/// Chaos dare prompts: adult stunts, age-gated.
pub const CHAOS_DARES: &[&str] = &[
    "Foto leher View Once.",
    "VN kata-kata nakal.",
    "Eja nama pakai lidah video.",
    "Gigit bibir seksi pap.",
    "VN suara ciuman.",
    "Chat pasangan 'Aku gak pake baju'.",
    "Foto lidah ahegao.",
    "VN panggil Daddy/Mommy.",
    "Status WA 'Lagi pengen'.",
    "Foto tangan remas bantal.",
    "Desah nama member VN.",
    "Foto paha aman menggoda.",
    "Foto bibir close up.",
    "Jilat jari pap.",
    "VN suara nafas berat.",
    "Foto perut/abs.",
    "Chat random 'Aku keras'.",
    "Foto bayangan tubuh.",
    "VN ASMR makan es krim.",
    "Foto kaki (feet).",
    "Video goyang pinggul.",
    "Foto bekas gigitan.",
    "VN 'Sentuh aku'.",
    "Foto kasur berantakan.",
    "Pakai lipstik berantakan pap.",
    "VN suara minum menggoda.",
    "Foto punggung.",
    "Pap outfit tidur.",
];

/// Chaos wildcard prompts: adult group rounds, age-gated.
pub const CHAOS_WILDCARDS: &[&str] = &[
    "VN desah atau foto bibir.",
    "Cerita mimpi basah atau pap paha.",
    "Pap outfit tidur atau jujur lampu.",
    "Dominant atau Submissive?",
    "Satu kata soal nafsu.",
    "Pilih member desah VN.",
    "Cerita ciuman pertama.",
    "Spit or swallow?",
    "Pilih orang kirim foto leher.",
    "Turn on terbesar?",
    "Awkward saat intim?",
    "Pagi atau malam buat 'itu'?",
    "Member VN suara berat.",
    "Pernah FWB?",
    "SS galeri tersembunyi.",
    "Suka oral?",
    "Sebut ukuran ideal.",
    "Pernah sexting?",
    "Lokasi main impian.",
    "Suka lingerie warna apa?",
    "Pilih member kirim foto tangan.",
    "Pernah one night stand?",
    "Rate skill kissing (1-10).",
    "Zona erotis favorit?",
    "Tipe tubuh ideal?",
    "Mandi bareng atau sendiri?",
    "VN 'I want you'.",
    "Mainan atau natural?",
];

/// The canonical seed list for a (category, kind) pair.
pub fn seed(category: Category, kind: Kind) -> &'static [&'static str] {
    match (category, kind) {
        (Category::Light, Kind::Truth) => LIGHT_TRUTHS,
        (Category::Light, Kind::Dare) => LIGHT_DARES,
        (Category::Light, Kind::Wildcard) => LIGHT_WILDCARDS,
        (Category::Deep, Kind::Truth) => DEEP_TRUTHS,
        (Category::Deep, Kind::Dare) => DEEP_DARES,
        (Category::Deep, Kind::Wildcard) => DEEP_WILDCARDS,
        (Category::Chaos, Kind::Truth) => CHAOS_TRUTHS,
        (Category::Chaos, Kind::Dare) => CHAOS_DARES,
        (Category::Chaos, Kind::Wildcard) => CHAOS_WILDCARDS,
    }
}

// interface text
//
// the page is arabic only; restaurant-specific text lives in the menu document instead

pub const LIGHT_MODE: &str = "تفعيل الوضع النهاري";
pub const DARK_MODE: &str = "تفعيل الوضع الليلي";

pub const CALL_US: &str = "اتصال بنا";
pub const CALL: &str = "اتصال";
pub const WHATSAPP: &str = "واتساب";
pub const WHATSAPP_ARIA: &str = "تواصل معنا عبر واتساب";
pub const LOCATION: &str = "الموقع";
pub const MENU: &str = "المنيو";

pub const CATEGORIES: &str = "تصنيفات الطعام";
pub const SCROLL_BACK: &str = "تمرير لليمين";
pub const SCROLL_FORWARD: &str = "تمرير لليسار";

pub const OPEN_NOW: &str = "مفتوح الآن";
pub const CATEGORY: &str = "التصنيف";
pub const POPULAR: &str = "مميز";

pub const CUSTOMIZE: &str = "التخصيص";
pub const ADD_PROTEIN: &str = "🍖 إضافة بروتين";
pub const ADDITION_PRICE: &str = "سعر الإضافة";

pub const SHARE_MENU: &str = "شارك المنيو 📱";
pub const SCAN_HINT: &str = "امسح الكود لفتح القائمة على جوالك";
pub const PRINT_QR: &str = "عرض الرمز بحجم كبير للطباعة";
pub const DIRECT_CONTACT: &str = "للتواصل المباشر";
pub const DESIGNED_BY: &str = "تصميم وتنفيذ";
pub const CONTACT: &str = "للتواصل";

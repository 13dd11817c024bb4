/// Lookup the directory name associated with a known folder GUID.
/// Entries not in the table are unmapped and left for the caller to keep as-is
pub(crate) fn lookup_known_folder(guid: &str) -> Option<&'static str> {
    let folder = match guid.to_uppercase().as_str() {
        "B4BFCC3A-DB2C-424C-B029-7FE99A87C641" => "Desktop",
        "FDD39AD0-238F-46AF-ADB4-6C85480369C7" => "Documents",
        "374DE290-123F-4565-9164-39C4925E467B" => "Downloads",
        "4BD8D571-6D19-48D3-BE97-422220080E43" => "Music",
        "33E28130-4E1E-4676-835A-98395C3BC3BB" => "Pictures",
        "18989B1D-99B5-455B-841C-AB7C74E4DDFC" => "Videos",
        "1777F761-68AD-4D8A-87BD-30B759FA33DD" => "Favorites",
        "AE50C081-EBD2-438A-8655-8A092E34987A" => "Recent",
        "8983036C-27C0-404B-8F08-102D10DCFD74" => "SendTo",
        "905E63B6-C1BF-494E-B29C-65B732D3D21A" => "ProgramFiles",
        "6D809377-6AF0-444B-8957-A3773F02200E" => "ProgramFilesX64",
        "7C5A40EF-A0FB-4BFC-874A-C0F2E0B9FA8E" => "ProgramFilesX86",
        "F7F1ED05-9F6D-47A2-AAAE-29D317C6F066" => "ProgramFilesCommon",
        "62AB5D82-FDC1-4DC3-A9DD-070D1D495D97" => "ProgramData",
        "F38BF404-1D43-42F2-9305-67DE0B28FC23" => "Windows",
        "1AC14E77-02E7-4E5D-B744-2EB1AE5198B7" => "System32",
        "D65231B0-B2F1-4857-A4CE-A8E7C6EA7D27" => "SystemX86",
        "3EB685DB-65F9-4CF6-A03A-E3EF65729F3D" => "AppDataRoaming",
        "F1B32785-6FBA-4FCF-9D55-7B8E7F157091" => "AppDataLocal",
        "5E6C858F-0E22-4760-9AFE-EA3317B67173" => "UserProfile",
        "0762D272-C50A-4BB0-A382-697DCD729B80" => "UserProfiles",
        "625B53C3-AB48-4EC1-BA1F-A1EF4146FC19" => "StartMenu",
        "A77F5D77-2E2B-44C3-A6A2-ABA601054A51" => "StartMenuPrograms",
        "B97D20BB-F46A-4C97-BA10-5E3608430854" => "Startup",
        "9E3995AB-1F9C-4F13-B827-48B24B6C7174" => "UserPinned",
        "DFDF76A2-C82A-4D63-906A-5644AC457385" => "Public",
        "C4AA340D-F20F-4863-AFEF-F87EF2E6BA25" => "PublicDesktop",
        "ED4824AF-DCE4-45A8-81E2-FC7965083634" => "PublicDocuments",
        "352481E8-33BE-4251-BA85-6007CAEDCF9D" => "InternetCache",
        _ => return None,
    };
    Some(folder)
}

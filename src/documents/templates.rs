//! Static layouts for every document the service can produce.

use super::layout::{DocumentLayout, DrawInstruction as D};

/// `{day}` and `{month_year}` are filled from the render date.
pub static DELAWARE_CORPORATION: DocumentLayout = DocumentLayout {
    name: "de-corporation",
    title: "Certificate of Incorporation",
    instructions: &[
        D::title(750.0, "CERTIFICATE OF INCORPORATION"),
        D::text(50.0, 700.0, "FIRST: The name of this corporation is:"),
        D::text(70.0, 680.0, "{company_name}"),
        D::text(50.0, 630.0, "SECOND: Its registered office in the State of Delaware is located at:"),
        D::text(70.0, 610.0, "251 Little Falls Drive, Wilmington, New Castle County, Delaware 19808"),
        D::text(50.0, 560.0, "THIRD: The purpose of the corporation is to engage in any lawful act or activity for"),
        D::text(50.0, 540.0, "which corporations may be organized under the General Corporation Law of Delaware."),
        D::text(50.0, 490.0, "FOURTH: The total number of shares of stock which this corporation is authorized"),
        D::text(50.0, 470.0, "to issue is 1,000 shares of Common Stock with $0.01 par value per share."),
        D::text(50.0, 200.0, "IN WITNESS WHEREOF, the undersigned, being the incorporator hereinbefore named,"),
        D::text(50.0, 180.0, "has executed this Certificate of Incorporation this {day} day of"),
        D::text(50.0, 160.0, "{month_year}."),
        D::text(50.0, 100.0, "Incorporator:"),
        D::text(70.0, 80.0, "{incorporator_name}"),
    ],
};

pub static DELAWARE_LLC: DocumentLayout = DocumentLayout {
    name: "de-llc",
    title: "Certificate of Formation",
    instructions: &[
        D::title(750.0, "CERTIFICATE OF FORMATION"),
        D::text(50.0, 700.0, "FIRST: The name of the limited liability company is:"),
        D::text(70.0, 680.0, "{company_name}"),
        D::text(50.0, 630.0, "SECOND: The address of its registered office in the State of Delaware is:"),
        D::text(70.0, 610.0, "251 Little Falls Drive, Wilmington, New Castle County, Delaware 19808"),
        D::text(50.0, 560.0, "THIRD: The name and address of its registered agent in the State of Delaware is:"),
        D::text(70.0, 540.0, "Corporation Service Company"),
        D::text(70.0, 520.0, "251 Little Falls Drive"),
        D::text(70.0, 500.0, "Wilmington, DE 19808"),
        D::text(50.0, 450.0, "FOURTH: The limited liability company shall be managed by its members."),
        D::text(50.0, 200.0, "IN WITNESS WHEREOF, the undersigned has executed this Certificate of Formation this {day} day of"),
        D::text(50.0, 180.0, "{month_year}."),
        D::text(50.0, 100.0, "Authorized Person:"),
        D::text(70.0, 80.0, "{incorporator_name}"),
    ],
};

pub static CALIFORNIA_CORPORATION: DocumentLayout = DocumentLayout {
    name: "ca-corporation",
    title: "Articles of Incorporation",
    instructions: &[
        D::title(750.0, "ARTICLES OF INCORPORATION"),
        D::text(50.0, 700.0, "ARTICLE I: The name of this corporation is:"),
        D::text(70.0, 680.0, "{company_name}"),
        D::text(50.0, 630.0, "ARTICLE II: The purpose of the corporation is to engage in any lawful act or activity"),
        D::text(50.0, 610.0, "for which a corporation may be organized under the General Corporation Law of California."),
        D::text(50.0, 560.0, "ARTICLE III: The name and address in California of the corporation's initial agent for service of process is:"),
        D::text(70.0, 540.0, "California Registered Agent, Inc."),
        D::text(70.0, 520.0, "123 Main Street"),
        D::text(70.0, 500.0, "Los Angeles, CA 90001"),
        D::text(50.0, 200.0, "IN WITNESS WHEREOF, the undersigned, being the incorporator hereinbefore named,"),
        D::text(50.0, 180.0, "has executed these Articles of Incorporation this {day} day of"),
        D::text(50.0, 160.0, "{month_year}."),
        D::text(50.0, 100.0, "Incorporator:"),
        D::text(70.0, 80.0, "{incorporator_name}"),
    ],
};

pub static CALIFORNIA_LLC: DocumentLayout = DocumentLayout {
    name: "ca-llc",
    title: "Articles of Organization",
    instructions: &[
        D::title(750.0, "ARTICLES OF ORGANIZATION"),
        D::text(50.0, 700.0, "ARTICLE I: The name of the limited liability company is:"),
        D::text(70.0, 680.0, "{company_name}"),
        D::text(50.0, 630.0, "ARTICLE II: The purpose of the limited liability company is to engage in any lawful business."),
        D::text(50.0, 560.0, "ARTICLE III: The name and address in California of the LLC's initial agent for service of process is:"),
        D::text(70.0, 540.0, "California Registered Agent, Inc."),
        D::text(70.0, 520.0, "123 Main Street"),
        D::text(70.0, 500.0, "Los Angeles, CA 90001"),
        D::text(50.0, 200.0, "IN WITNESS WHEREOF, the undersigned has executed these Articles of Organization this {day} day of"),
        D::text(50.0, 180.0, "{month_year}."),
        D::text(50.0, 100.0, "Authorized Person:"),
        D::text(70.0, 80.0, "{incorporator_name}"),
    ],
};

/// Articles I-IV sit at fixed coordinates. The officer list grows downward
/// and Article V follows it through the running cursor.
pub static BYLAWS: DocumentLayout = DocumentLayout {
    name: "bylaws",
    title: "Corporate Bylaws",
    instructions: &[
        D::title(750.0, "CORPORATE BYLAWS OF"),
        D::title(730.0, "{company_name_upper}"),
        D::heading(50.0, 680.0, "ARTICLE I - OFFICES"),
        D::text(50.0, 660.0, "The principal office of the corporation shall be located at:"),
        D::text(70.0, 640.0, "{principal_office}"),
        D::heading(50.0, 600.0, "ARTICLE II - SHAREHOLDERS MEETINGS"),
        D::text(50.0, 580.0, "1. Annual Meeting. The annual meeting of shareholders shall be held in"),
        D::text(70.0, 560.0, "{annual_meeting_month} of each year."),
        D::text(50.0, 540.0, "2. Quorum. {quorum_percentage}% of the outstanding shares shall constitute"),
        D::text(70.0, 520.0, "a quorum for the transaction of business."),
        D::heading(50.0, 480.0, "ARTICLE III - BOARD OF DIRECTORS"),
        D::text(50.0, 460.0, "1. Number. The Board of Directors shall consist of {board_size}"),
        D::text(70.0, 440.0, "director(s)."),
        D::heading(50.0, 400.0, "ARTICLE IV - OFFICERS"),
        D::text(50.0, 380.0, "1. Officers. The officers of the corporation shall be:"),
        D::list(70.0, 20.0, "officer_titles", "- "),
        D::heading_below(50.0, 40.0, "ARTICLE V - FISCAL YEAR"),
        D::text_below(50.0, 20.0, "The fiscal year of the corporation shall end on {fiscal_year_end}"),
        D::text_below(50.0, 20.0, "of each year."),
    ],
};
